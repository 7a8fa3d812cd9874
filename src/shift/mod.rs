pub mod bd09;
pub mod gcj02;
pub mod krasovsky;
pub mod mercator;
pub mod pipeline;
pub mod system;

use system::ReferenceSystem;

/// Trait for a fixed conversion between two reference systems.
///
/// Every implementation is a pure function of its inputs: no state is carried
/// between calls, so one instance can be shared freely across threads.
pub trait Shift: Send + Sync {
    /// Convert one (x, y) pair. Degrees for geographic systems, metres for Web Mercator.
    fn apply(&self, x: f64, y: f64) -> (f64, f64);

    /// Batch conversion in place (default: loop).
    fn apply_batch(&self, coords: &mut [(f64, f64)]) {
        for c in coords.iter_mut() {
            *c = self.apply(c.0, c.1);
        }
    }

    fn source(&self) -> ReferenceSystem;

    fn target(&self) -> ReferenceSystem;
}
