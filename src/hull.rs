//! The hull as supplied by the caller and its canonical derived form.
//!
//! - [HullConf] carries the raw principal dimensions, form coefficients,
//!   appendage inventory and target speeds;
//! - [HullDescriptor] normalizes them into the parameter set
//!   the regression formulas read.
//
pub mod appendage;
pub mod descriptor;
pub mod hull_conf;
//
pub use appendage::{AppendageConf, AppendageKind};
pub use descriptor::HullDescriptor;
pub use hull_conf::HullConf;
