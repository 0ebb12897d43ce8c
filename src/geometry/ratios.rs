#[cfg(test)]
#[path = "../tests/geometry/ratios.rs"]
mod tests;
//
use crate::{error::Error, hull::descriptor::HullDescriptor};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Threshold under which a regression denominator counts as collapsed.
pub(crate) const SINGULARITY_EPSILON: f64 = 1e-9;
///
/// Run length and the dimensionless ratios of the Holtrop regression,
/// pure functions of [HullDescriptor] fields.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryRatios {
    ///
    /// Length of the run, m.
    pub lr: f64,
    pub breadth_draught: f64,
    pub breadth_lwl: f64,
    pub breadth_lr: f64,
    pub draught_lwl: f64,
    pub lwl_lr: f64,
    ///
    /// LWL^3 over displacement volume.
    pub lwl3_displacement: f64,
}
//
//
impl GeometryRatios {
    ///
    /// Derives the run length and the ratios.
    ///
    /// # Errors
    /// [Error::SingularGeometry] when CP is near 0.25
    /// and the run length denominator 4*CP-1 collapses.
    pub fn new(parent: &DbgId, hull: &HullDescriptor) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "GeometryRatios");
        let denominator = 4.0 * hull.cp - 1.0;
        if denominator.abs() < SINGULARITY_EPSILON {
            return Err(Error::SingularGeometry(format!(
                "{} | Run length is singular at CP={}, 4*CP-1={}",
                dbgid, hull.cp, denominator
            )));
        }
        let lr = hull.lwl * (1.0 - hull.cp + 0.06 * hull.cp * hull.lcb_midship / denominator);
        log::debug!("{} | LR={}", dbgid, lr);
        Ok(Self {
            lr,
            breadth_draught: hull.breadth / hull.draught,
            breadth_lwl: hull.breadth / hull.lwl,
            breadth_lr: hull.breadth / lr,
            draught_lwl: hull.draught / hull.lwl,
            lwl_lr: hull.lwl / lr,
            lwl3_displacement: hull.lwl.powi(3) / hull.displacement,
        })
    }
}
