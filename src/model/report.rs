use crate::error::Error;
use indexmap::IndexMap;
///
/// Report key, the speed in knots exactly as supplied by the caller.
///
/// Equality and hashing go through the raw bit pattern, so the key
/// round-trips without float comparison and keeps caller order
/// traceable in the report.
#[derive(Clone, Copy, Debug)]
pub struct SpeedKey(pub f64);
//
//
impl PartialEq for SpeedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}
//
//
impl Eq for SpeedKey {}
//
//
impl std::hash::Hash for SpeedKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}
//
//
impl std::fmt::Display for SpeedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
///
/// Hull-level derived values, invariant across the requested speeds.
#[derive(Clone, Debug, PartialEq)]
pub struct HullSummary {
    ///
    /// Mean draught, m.
    pub draught: f64,
    ///
    /// Block coefficient.
    pub cb: f64,
    ///
    /// Prismatic coefficient.
    pub cp: f64,
    ///
    /// Longitudinal center of buoyancy, % of LWL from midship.
    pub lcb_midship: f64,
    ///
    /// Length of the run, m.
    pub lr: f64,
    ///
    /// Wetted surface of the bare hull, m2.
    pub wetted_surface: f64,
    ///
    /// Viscous form factor 1+k1.
    pub form_factor: f64,
    ///
    /// Draught ratio coefficient of the 1982 form factor variant.
    pub c12: f64,
    ///
    /// Stern shape coefficient.
    pub c14: f64,
    ///
    /// Water density of the operating area, kg/m3.
    pub water_density: f64,
}
///
/// Resistance components computed for one requested speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedRecord {
    ///
    /// Speed in m/s.
    pub speed_si: f64,
    ///
    /// Reynolds number over the waterline length.
    pub reynolds: f64,
    ///
    /// ITTC-57 friction coefficient.
    pub cf: f64,
    ///
    /// Frictional resistance RF of the bare hull, N.
    pub frictional: f64,
    ///
    /// Viscous resistance (1+k1)*RF, N.
    pub viscous: f64,
    ///
    /// Appendage resistance RAPP, N,
    /// [None] when the hull carries no appendages.
    pub appendages: Option<f64>,
}
///
/// Deterministic mapping from requested speed to resistance components.
///
/// Entries keep the caller's speed order, a failed speed is stored
/// as its [Error] while the remaining speeds still carry records.
#[derive(Debug)]
pub struct ResistanceReport {
    ///
    /// Hull-level derived values.
    pub hull: HullSummary,
    speeds: IndexMap<SpeedKey, Result<SpeedRecord, Error>>,
}
//
//
impl ResistanceReport {
    ///
    /// An empty report carrying the hull-level values.
    pub(crate) fn new(hull: HullSummary) -> Self {
        Self {
            hull,
            speeds: IndexMap::new(),
        }
    }
    ///
    /// Stores the outcome for `speed_kn`.
    pub(crate) fn insert(&mut self, speed_kn: f64, entry: Result<SpeedRecord, Error>) {
        self.speeds.insert(SpeedKey(speed_kn), entry);
    }
    ///
    /// Outcome for `speed_kn` as supplied to [crate::model::ShipModel].
    pub fn get(&self, speed_kn: f64) -> Option<&Result<SpeedRecord, Error>> {
        self.speeds.get(&SpeedKey(speed_kn))
    }
    ///
    /// Outcomes in the caller's speed order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpeedKey, &Result<SpeedRecord, Error>)> {
        self.speeds.iter()
    }
    ///
    /// Number of requested speeds in the report.
    pub fn len(&self) -> usize {
        self.speeds.len()
    }
    ///
    /// Whether no speed was requested.
    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}
