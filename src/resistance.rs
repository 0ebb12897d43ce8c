//! Per-speed resistance components of the Holtrop-Mennen method.
//!
//! Each calculator is a pure function over an explicit parameter set:
//! - [form_factor] - viscous form factor 1+k1 of the bare hull;
//! - [frictional] - ITTC-57 friction coefficient and frictional force RF;
//! - [appendages] - equivalent 1+k2 and appendage force RAPP.
//
pub mod appendages;
pub mod form_factor;
pub mod frictional;
