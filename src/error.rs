//! Typed failures of the resistance pipeline.
//!
//! Every message is prefixed with the [DbgId] path of the failed step,
//! so the origin of the error can be read directly from its text.
//!
//! [DbgId]: sal_sync::services::entity::dbg_id::DbgId
///
/// Failure of a derivation step of the resistance pipeline.
#[derive(Clone, PartialEq)]
pub enum Error {
    ///
    /// Non-positive or missing principal hull dimension.
    InvalidHullGeometry(String),
    ///
    /// A regression denominator collapses for the given hull form,
    /// CP near 0.25 in the run length, CP near 1.0 in the form factor.
    SingularGeometry(String),
    ///
    /// Reynolds number too small for the ITTC-57 correlation line.
    InvalidSpeedRegime(String),
    ///
    /// Appendage resistance requested against an empty inventory.
    NoAppendages(String),
}
//
//
impl Error {
    ///
    /// The message passed at the failed step.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidHullGeometry(message) => message,
            Self::SingularGeometry(message) => message,
            Self::InvalidSpeedRegime(message) => message,
            Self::NoAppendages(message) => message,
        }
    }
}
//
//
impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::InvalidHullGeometry(_) => "InvalidHullGeometry",
            Self::SingularGeometry(_) => "SingularGeometry",
            Self::InvalidSpeedRegime(_) => "InvalidSpeedRegime",
            Self::NoAppendages(_) => "NoAppendages",
        };
        write!(f, "{}: {:?}", kind, self.message())
    }
}
//
//
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
//
//
impl std::error::Error for Error {}
