#[cfg(test)]
#[path = "../tests/resistance/form_factor.rs"]
mod tests;
//
use crate::{
    error::Error,
    geometry::ratios::{GeometryRatios, SINGULARITY_EPSILON},
    hull::descriptor::HullDescriptor,
};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Stern shape coefficient, Holtrop 1984.
pub fn c14(c_stern: f64) -> f64 {
    1.0 + 0.011 * c_stern
}
///
/// Draught ratio coefficient of the 1982 form factor variant,
/// piecewise over draught/LWL.
pub fn c12(draught_lwl: f64) -> f64 {
    if draught_lwl > 0.05 {
        draught_lwl.powf(0.2228446)
    } else if draught_lwl >= 0.02 {
        48.2 * (draught_lwl - 0.02).powf(2.078) + 0.479948
    } else {
        0.479948
    }
}
///
/// Viscous form factor 1+k1 of the bare hull, Holtrop 1984.
///
/// # Errors
/// [Error::SingularGeometry] when CP is near 1.0
/// and the (1-CP)^-0.604247 term diverges.
pub fn form_factor(
    parent: &DbgId,
    hull: &HullDescriptor,
    ratios: &GeometryRatios,
) -> Result<f64, Error> {
    let dbgid = DbgId(format!("{}.form_factor", parent));
    let fullness = 1.0 - hull.cp;
    if fullness < SINGULARITY_EPSILON {
        return Err(Error::SingularGeometry(format!(
            "{} | Form factor is singular at CP={}",
            dbgid, hull.cp
        )));
    }
    let form_factor = 0.93
        + 0.487118
            * c14(hull.c_stern)
            * ratios.breadth_lwl.powf(1.06806)
            * ratios.draught_lwl.powf(0.46106)
            * ratios.lwl_lr.powf(0.121563)
            * ratios.lwl3_displacement.powf(0.36486)
            * fullness.powf(-0.604247);
    log::debug!("{} | 1+k1={}", dbgid, form_factor);
    Ok(form_factor)
}
