//! Run length, dimensionless hull ratios and wetted surface,
//! derived once per hull and reused across all requested speeds.
//
pub mod ratios;
pub mod wetted_surface;
//
pub use ratios::GeometryRatios;
pub use wetted_surface::wetted_surface;
