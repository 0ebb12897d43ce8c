//! Physical constants and derived flow quantities.
//
#[cfg(test)]
#[path = "tests/physics.rs"]
mod tests;
///
/// Sea water density, kg/m3.
pub const WATER_DENSITY_OCEAN: f64 = 1025.0;
///
/// Fresh water density, kg/m3.
pub const WATER_DENSITY_RIVER: f64 = 1000.0;
///
/// Standard gravity, m/s2.
pub const GRAVITY: f64 = 9.81;
///
/// Kinematic viscosity of water at 25 C, m2/s.
pub const WATER_VISCOSITY_KINEMATIC: f64 = 0.000000893;
///
/// Water density for the operating area, kg/m3.
pub fn water_density(is_ocean: bool) -> f64 {
    if is_ocean {
        WATER_DENSITY_OCEAN
    } else {
        WATER_DENSITY_RIVER
    }
}
///
/// Converts speed in knots into m/s.
pub fn knots_to_ms(speed_kn: f64) -> f64 {
    speed_kn * 1852.0 / 3600.0
}
///
/// Flow state of the hull at one requested speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedState {
    ///
    /// Speed as requested by the caller, knots.
    pub speed_kn: f64,
    ///
    /// Speed in m/s.
    pub speed_si: f64,
    ///
    /// Reynolds number over the waterline length.
    pub reynolds: f64,
}
//
//
impl SpeedState {
    ///
    /// Derives the flow state for `speed_kn` over waterline length `lwl`.
    pub fn new(speed_kn: f64, lwl: f64) -> Self {
        let speed_si = knots_to_ms(speed_kn);
        Self {
            speed_kn,
            speed_si,
            reynolds: speed_si * lwl / WATER_VISCOSITY_KINEMATIC,
        }
    }
}
