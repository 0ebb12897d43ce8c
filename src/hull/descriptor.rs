#[cfg(test)]
#[path = "../tests/hull/descriptor.rs"]
mod tests;
//
use crate::{error::Error, hull::hull_conf::HullConf};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Canonical hull parameter set derived from [HullConf].
///
/// Carries the principal dimensions the regression formulas read,
/// so downstream steps never touch the raw record again.
#[derive(Clone, Debug, PartialEq)]
pub struct HullDescriptor {
    pub lwl: f64,
    pub breadth: f64,
    ///
    /// Mean draught of the aft and forward values.
    pub draught: f64,
    pub displacement: f64,
    ///
    /// Block coefficient.
    pub cb: f64,
    ///
    /// Midship section coefficient.
    pub cm: f64,
    ///
    /// Prismatic coefficient.
    pub cp: f64,
    ///
    /// Waterplane area coefficient.
    pub cwp: f64,
    ///
    /// Longitudinal center of buoyancy, % of LWL measured from midship.
    pub lcb_midship: f64,
    pub transversal_bulb_area: f64,
    pub c_stern: f64,
}
//
//
impl HullDescriptor {
    ///
    /// Derives the canonical parameter set, validating the dimensions
    /// every later division depends on.
    ///
    /// # Errors
    /// [Error::InvalidHullGeometry] if LWL, breadth, mean draught,
    /// displacement or CM is not strictly positive (NaN included).
    pub fn new(parent: &DbgId, conf: &HullConf) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "HullDescriptor");
        let draught = (conf.draught_ap + conf.draught_fp) / 2.0;
        for (name, value) in [
            ("LWL", conf.lwl),
            ("breadth", conf.breadth),
            ("draught", draught),
            ("displacement", conf.displacement),
            ("CM", conf.cm),
        ] {
            if !(value > 0.0) {
                return Err(Error::InvalidHullGeometry(format!(
                    "{} | {} must be positive, got {}",
                    dbgid, name, value
                )));
            }
        }
        let cb = conf.displacement / (conf.lwl * conf.breadth * draught);
        let cp = cb / conf.cm;
        let lcb_midship =
            ((conf.lcb_ap + conf.lwl - conf.lpp) - 0.5 * conf.lwl) * 100.0 / conf.lwl;
        log::debug!(
            "{} | draught={} CB={} CP={} LCB_midship={}",
            dbgid,
            draught,
            cb,
            cp,
            lcb_midship
        );
        Ok(Self {
            lwl: conf.lwl,
            breadth: conf.breadth,
            draught,
            displacement: conf.displacement,
            cb,
            cm: conf.cm,
            cp,
            cwp: conf.cwp,
            lcb_midship,
            transversal_bulb_area: conf.transversal_bulb_area,
            c_stern: conf.c_stern,
        })
    }
}
