#[cfg(test)]
#[path = "../tests/geometry/wetted_surface.rs"]
mod tests;
//
use crate::{error::Error, hull::descriptor::HullDescriptor};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Wetted surface area of the bare hull, m2, Holtrop 1984 regression.
///
/// `ratio_breadth_draught` is the breadth over mean draught ratio
/// already derived in [crate::geometry::ratios::GeometryRatios].
///
/// # Errors
/// [Error::InvalidHullGeometry] if CB is not positive,
/// the bulb term divides by it.
pub fn wetted_surface(
    parent: &DbgId,
    hull: &HullDescriptor,
    ratio_breadth_draught: f64,
) -> Result<f64, Error> {
    let dbgid = DbgId(format!("{}.wetted_surface", parent));
    if !(hull.cb > 0.0) {
        return Err(Error::InvalidHullGeometry(format!(
            "{} | CB must be positive, got {}",
            dbgid, hull.cb
        )));
    }
    let hull_part = hull.lwl * (2.0 * hull.draught + hull.breadth) * hull.cm.sqrt();
    let coefficient_part = 0.453 + 0.4425 * hull.cb - 0.2862 * hull.cm
        - 0.003467 * ratio_breadth_draught
        + 0.3696 * hull.cwp;
    let bulb_part = 2.38 * hull.transversal_bulb_area / hull.cb;
    let wetted_surface = hull_part * coefficient_part + bulb_part;
    log::debug!("{} | S={}", dbgid, wetted_surface);
    Ok(wetted_surface)
}
