#[cfg(test)]
#[path = "../tests/resistance/frictional.rs"]
mod tests;
//
use crate::error::Error;
use sal_sync::services::entity::dbg_id::DbgId;
///
/// ITTC-1957 correlation line friction coefficient.
///
/// # Errors
/// [Error::InvalidSpeedRegime] when `reynolds` <= 1,
/// below any regime the correlation line was fitted for.
pub fn friction_coefficient(parent: &DbgId, reynolds: f64) -> Result<f64, Error> {
    let dbgid = DbgId(format!("{}.friction_coefficient", parent));
    if !(reynolds > 1.0) {
        return Err(Error::InvalidSpeedRegime(format!(
            "{} | Reynolds number out of the ITTC-57 regime, got {}",
            dbgid, reynolds
        )));
    }
    Ok(0.075 / (reynolds.log10() - 2.0).powi(2))
}
///
/// Frictional resistance RF of the bare hull, N.
///
/// This is the bare flat-plate force, the form factor is applied
/// separately as the viscous resistance (1+k1)*RF.
pub fn frictional_resistance(
    speed_si: f64,
    wetted_surface: f64,
    friction_coefficient: f64,
    water_density: f64,
) -> f64 {
    0.0005 * water_density * speed_si.powi(2) * wetted_surface * friction_coefficient
}
