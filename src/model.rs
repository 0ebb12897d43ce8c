//!
//! The calm-water resistance model of a displacement hull
//!
//! - Derives the canonical hull parameters once per hull
//!
//! - Provides a number of calculations over the requested speeds:
//!     - Frictional resistance RF and viscous resistance (1+k1)*RF
//!     - Appendage resistance RAPP
//!
#[cfg(test)]
#[path = "tests/model.rs"]
mod tests;
//
pub mod report;
//
use crate::{
    error::Error,
    geometry::{ratios::GeometryRatios, wetted_surface::wetted_surface},
    hull::{descriptor::HullDescriptor, hull_conf::HullConf},
    physics::{water_density, SpeedState},
    resistance::{
        appendages::appendages_resistance,
        form_factor::{c12, c14, form_factor},
        frictional::{friction_coefficient, frictional_resistance},
    },
};
use report::{HullSummary, ResistanceReport, SpeedRecord};
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Holtrop-Mennen resistance pipeline over one hull configuration.
pub struct ShipModel {
    dbgid: DbgId,
    conf: HullConf,
}
//
//
impl ShipModel {
    ///
    /// Creates a new instance over `conf`.
    pub fn new(parent: &DbgId, conf: HullConf) -> Self {
        let dbgid = DbgId::with_parent(parent, "ShipModel");
        Self { dbgid, conf }
    }
    ///
    /// Runs the pipeline for every requested speed.
    ///
    /// Hull-level derivation runs once, its failure aborts the batch.
    /// A failure of a single speed is stored as that speed's entry
    /// and the remaining speeds are still evaluated.
    ///
    /// # Errors
    /// [Error::InvalidHullGeometry] or [Error::SingularGeometry]
    /// from the hull-level derivation.
    pub fn calculate(&self) -> Result<ResistanceReport, Error> {
        let dbgid = DbgId(format!("{}.calculate", self.dbgid));
        let hull = HullDescriptor::new(&self.dbgid, &self.conf)?;
        let ratios = GeometryRatios::new(&self.dbgid, &hull)?;
        let wetted_surface = wetted_surface(&self.dbgid, &hull, ratios.breadth_draught)?;
        let form_factor = form_factor(&self.dbgid, &hull, &ratios)?;
        let water_density = water_density(self.conf.is_ocean);
        let has_appendages = self.conf.appendage_area() > 0.0;
        let mut report = ResistanceReport::new(HullSummary {
            draught: hull.draught,
            cb: hull.cb,
            cp: hull.cp,
            lcb_midship: hull.lcb_midship,
            lr: ratios.lr,
            wetted_surface,
            form_factor,
            c12: c12(ratios.draught_lwl),
            c14: c14(hull.c_stern),
            water_density,
        });
        for &speed_kn in &self.conf.speeds {
            let entry = self.speed_entry(
                speed_kn,
                hull.lwl,
                wetted_surface,
                form_factor,
                water_density,
                has_appendages,
            );
            if let Err(err) = &entry {
                log::warn!("{} | speed={} kn failed: {}", dbgid, speed_kn, err);
            }
            report.insert(speed_kn, entry);
        }
        log::info!("{} | {} speed(s) evaluated", dbgid, report.len());
        Ok(report)
    }
    ///
    /// Resistance components for a single requested speed.
    fn speed_entry(
        &self,
        speed_kn: f64,
        lwl: f64,
        wetted_surface: f64,
        form_factor: f64,
        water_density: f64,
        has_appendages: bool,
    ) -> Result<SpeedRecord, Error> {
        let state = SpeedState::new(speed_kn, lwl);
        let cf = friction_coefficient(&self.dbgid, state.reynolds)?;
        let frictional = frictional_resistance(state.speed_si, wetted_surface, cf, water_density);
        let appendages = if has_appendages {
            Some(appendages_resistance(
                &self.dbgid,
                state.speed_si,
                &self.conf.appendages,
                cf,
                water_density,
            )?)
        } else {
            None
        };
        Ok(SpeedRecord {
            speed_si: state.speed_si,
            reynolds: state.reynolds,
            cf,
            frictional,
            viscous: form_factor * frictional,
            appendages,
        })
    }
}
