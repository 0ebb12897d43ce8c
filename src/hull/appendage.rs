use indexmap::IndexMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
///
/// Appendage types of the Holtrop-Mennen inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum AppendageKind {
    RudderBehindSkeg,
    RudderBehindStern,
    TwinScrewBalanceRudders,
    ShaftBrackets,
    Skeg,
    StrutBossings,
    HullBossings,
    Shafts,
    StabilizerFins,
    Dome,
    BilgeKeels,
}
//
//
impl AppendageKind {
    ///
    /// Empirical 1+k2 drag coefficient of the appendage type, Holtrop 1984.
    pub fn drag_coefficient(&self) -> f64 {
        match self {
            Self::RudderBehindSkeg => 2.0,
            Self::RudderBehindStern => 1.5,
            Self::TwinScrewBalanceRudders => 2.8,
            Self::ShaftBrackets => 3.0,
            Self::Skeg => 2.0,
            Self::StrutBossings => 3.0,
            Self::HullBossings => 2.0,
            Self::Shafts => 4.0,
            Self::StabilizerFins => 2.8,
            Self::Dome => 2.7,
            Self::BilgeKeels => 1.4,
        }
    }
}
//
//
impl std::fmt::Display for AppendageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RudderBehindSkeg => "rudder_behind_skeg",
            Self::RudderBehindStern => "rudder_behind_stern",
            Self::TwinScrewBalanceRudders => "twin-screw_balance_rudders",
            Self::ShaftBrackets => "shaft_brackets",
            Self::Skeg => "skeg",
            Self::StrutBossings => "strut_bossings",
            Self::HullBossings => "hull_bossings",
            Self::Shafts => "shafts",
            Self::StabilizerFins => "stabilizer_fins",
            Self::Dome => "dome",
            Self::BilgeKeels => "bilge_keels",
        };
        write!(f, "{}", name)
    }
}
///
/// One appendage entry of the inventory.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppendageConf {
    ///
    /// Number of fitted appendages of the type.
    pub amount: usize,
    ///
    /// Wetted area of a single appendage, m2.
    pub area: f64,
    ///
    /// Empirical 1+k2 drag coefficient of the type.
    pub value: f64,
}
//
//
impl AppendageConf {
    ///
    /// An entry of `amount` appendages of `area` m2 each,
    /// with the standard drag coefficient of `kind`.
    pub fn new(kind: AppendageKind, amount: usize, area: f64) -> Self {
        Self {
            amount,
            area,
            value: kind.drag_coefficient(),
        }
    }
}
///
/// The full inventory with standard drag coefficients and zero amounts.
///
/// Callers fill in `amount` and `area` for the types the hull carries.
pub fn standard_inventory() -> IndexMap<AppendageKind, AppendageConf> {
    AppendageKind::iter()
        .map(|kind| (kind, AppendageConf::new(kind, 0, 0.0)))
        .collect()
}
