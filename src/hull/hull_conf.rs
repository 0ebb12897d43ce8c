use crate::hull::appendage::{AppendageConf, AppendageKind};
use indexmap::IndexMap;
///
/// [crate::model::ShipModel] input record.
///
/// It can be used to wrap hull data getting from an external source,
/// all lengths in m, areas in m2, displacement in m3, speeds in knots.
#[derive(Clone, Debug)]
pub struct HullConf {
    ///
    /// Whether the hull operates in sea water.
    pub is_ocean: bool,
    ///
    /// Length between perpendiculars.
    pub lpp: f64,
    ///
    /// Length at waterline.
    pub lwl: f64,
    pub breadth: f64,
    ///
    /// Draught at aft perpendicular.
    pub draught_ap: f64,
    ///
    /// Draught at forward perpendicular.
    pub draught_fp: f64,
    pub displacement: f64,
    ///
    /// Longitudinal center of buoyancy, measured from aft perpendicular.
    pub lcb_ap: f64,
    ///
    /// Transverse sectional area of the bulb at the forward perpendicular.
    pub transversal_bulb_area: f64,
    ///
    /// Height of the bulb section center over the keel line.
    pub center_bulb_area: f64,
    ///
    /// Midship section coefficient.
    pub cm: f64,
    ///
    /// Waterplane area coefficient.
    pub cwp: f64,
    ///
    /// Immersed transom area.
    pub transom_area: f64,
    ///
    /// Stern shape parameter of Holtrop 1984.
    pub c_stern: f64,
    ///
    /// Appendage inventory, see [crate::hull::appendage::standard_inventory].
    pub appendages: IndexMap<AppendageKind, AppendageConf>,
    ///
    /// Target speeds, knots, evaluated in the given order.
    pub speeds: Vec<f64>,
}
//
//
impl HullConf {
    ///
    /// Total wetted appendage area of the inventory, m2.
    pub fn appendage_area(&self) -> f64 {
        self.appendages
            .values()
            .map(|appendage| appendage.area * appendage.amount as f64)
            .sum()
    }
}
