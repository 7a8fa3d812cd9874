//! Vertex-wise transforms for `geo` geometries.
//!
//! Every vertex is converted on its own; ring structure (exterior, interiors,
//! closing vertex) is left intact because only coordinate values change.

use geo::{Coord, Geometry, MapCoordsInPlace};
use log::trace;
use rayon::prelude::*;

use crate::shift::pipeline::Pipeline;
use crate::shift::Shift;

/// Convert one coordinate.
pub fn transform_coord(coord: Coord<f64>, pipeline: &Pipeline) -> Coord<f64> {
    let (x, y) = pipeline.apply(coord.x, coord.y);
    Coord { x, y }
}

/// Convert every vertex of any `geo` geometry type in place.
pub fn transform_in_place<G>(geom: &mut G, pipeline: &Pipeline)
where
    G: MapCoordsInPlace<f64>,
{
    if pipeline.is_identity() {
        return;
    }
    geom.map_coords_in_place(|c| transform_coord(c, pipeline));
}

pub fn transform_geometry(geom: &mut Geometry<f64>, pipeline: &Pipeline) {
    transform_in_place(geom, pipeline);
}

/// Convert a collection of independent geometries, e.g. all features of a layer.
pub fn transform_geometries(geoms: &mut [Geometry<f64>], pipeline: &Pipeline) {
    trace!(
        "transforming {} geometries {} -> {}",
        geoms.len(),
        pipeline.source(),
        pipeline.target()
    );
    geoms
        .par_iter_mut()
        .for_each(|g| transform_geometry(g, pipeline));
}
