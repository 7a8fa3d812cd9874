//! Batch transforms over coordinate buffers.
//!
//! Each point is converted independently, so the work is split across the rayon
//! pool. Output is identical to calling `Shift::apply` point by point.

use log::trace;
use ndarray::{ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::error::ShiftError;
use crate::shift::pipeline::Pipeline;
use crate::shift::Shift;

/// Parallel in-place transform of (x, y) pairs.
pub fn par_transform(pipeline: &Pipeline, coords: &mut [(f64, f64)]) {
    trace!(
        "transforming {} points {} -> {}",
        coords.len(),
        pipeline.source(),
        pipeline.target()
    );
    if pipeline.is_identity() {
        return;
    }
    coords
        .par_iter_mut()
        .for_each(|c| *c = pipeline.apply(c.0, c.1));
}

/// Parallel in-place transform of separate x and y buffers.
pub fn transform_xy(pipeline: &Pipeline, xs: &mut [f64], ys: &mut [f64]) -> Result<(), ShiftError> {
    if xs.len() != ys.len() {
        return Err(ShiftError::Shape(format!(
            "x and y must have same length, got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    trace!("transforming {} x/y values", xs.len());
    if pipeline.is_identity() {
        return Ok(());
    }
    xs.par_iter_mut()
        .zip(ys.par_iter_mut())
        .for_each(|(x, y)| {
            let (tx, ty) = pipeline.apply(*x, *y);
            *x = tx;
            *y = ty;
        });
    Ok(())
}

/// Parallel in-place transform of an `(n, 2)` array of (x, y) rows.
pub fn transform_array(pipeline: &Pipeline, mut coords: ArrayViewMut2<'_, f64>) -> Result<(), ShiftError> {
    if coords.ncols() != 2 {
        return Err(ShiftError::Shape(format!(
            "expected an (n, 2) coordinate array, got {:?}",
            coords.shape()
        )));
    }
    trace!("transforming {} coordinate rows", coords.nrows());
    if pipeline.is_identity() {
        return Ok(());
    }
    coords
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .for_each(|mut row| {
            let (x, y) = pipeline.apply(row[0], row[1]);
            row[0] = x;
            row[1] = y;
        });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::system::ReferenceSystem;
    use ndarray::{array, Array2};

    fn grid() -> Vec<(f64, f64)> {
        let mut pts = Vec::new();
        for i in 0..40 {
            for j in 0..30 {
                pts.push((74.0 + i as f64 * 1.5, 4.0 + j as f64 * 1.7));
            }
        }
        pts
    }

    #[test]
    fn test_par_transform_matches_sequential() {
        let pipe = Pipeline::new(ReferenceSystem::Wgs84, ReferenceSystem::Bd09).unwrap();
        let mut par = grid();
        let mut seq = grid();
        par_transform(&pipe, &mut par);
        pipe.apply_batch(&mut seq);
        assert_eq!(par, seq);
    }

    #[test]
    fn test_transform_xy() {
        let pipe = Pipeline::new(ReferenceSystem::Wgs84, ReferenceSystem::Gcj02).unwrap();
        let mut xs = vec![116.39745, 0.0];
        let mut ys = vec![39.908755, 0.0];
        transform_xy(&pipe, &mut xs, &mut ys).unwrap();
        assert_eq!((xs[0], ys[0]), pipe.apply(116.39745, 39.908755));
        assert_eq!((xs[1], ys[1]), (0.0, 0.0));
    }

    #[test]
    fn test_transform_xy_length_mismatch() {
        let pipe = Pipeline::new(ReferenceSystem::Wgs84, ReferenceSystem::Gcj02).unwrap();
        let mut xs = vec![1.0, 2.0];
        let mut ys = vec![1.0];
        let err = transform_xy(&pipe, &mut xs, &mut ys).unwrap_err();
        assert!(matches!(err, ShiftError::Shape(_)));
        // Nothing was touched
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn test_transform_array() {
        let pipe = Pipeline::new(ReferenceSystem::Wgs84, ReferenceSystem::WebMercator).unwrap();
        let mut arr = array![[0.0, 0.0], [120.0, 60.0], [-73.9857, 40.7484]];
        let expected: Vec<(f64, f64)> = arr
            .rows()
            .into_iter()
            .map(|r| pipe.apply(r[0], r[1]))
            .collect();
        transform_array(&pipe, arr.view_mut()).unwrap();
        for (row, &(x, y)) in arr.rows().into_iter().zip(expected.iter()) {
            assert_eq!(row[0], x);
            assert_eq!(row[1], y);
        }
    }

    #[test]
    fn test_transform_array_bad_shape() {
        let pipe = Pipeline::new(ReferenceSystem::Wgs84, ReferenceSystem::Gcj02).unwrap();
        let mut arr = Array2::<f64>::zeros((4, 3));
        assert!(matches!(
            transform_array(&pipe, arr.view_mut()),
            Err(ShiftError::Shape(_))
        ));
    }
}
