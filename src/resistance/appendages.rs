#[cfg(test)]
#[path = "../tests/resistance/appendages.rs"]
mod tests;
//
use crate::{
    error::Error,
    hull::appendage::{AppendageConf, AppendageKind},
};
use indexmap::IndexMap;
use sal_sync::services::entity::dbg_id::DbgId;
///
/// Appendage resistance RAPP, N.
///
/// The inventory is reduced to its total wetted area and the
/// area-weighted equivalent 1+k2, `friction_coefficient` is the
/// bare hull ITTC-57 value of the same speed.
///
/// # Errors
/// [Error::NoAppendages] when the inventory has no wetted area.
pub fn appendages_resistance(
    parent: &DbgId,
    speed_si: f64,
    appendages: &IndexMap<AppendageKind, AppendageConf>,
    friction_coefficient: f64,
    water_density: f64,
) -> Result<f64, Error> {
    let dbgid = DbgId(format!("{}.appendages_resistance", parent));
    let mut total_area = 0.0;
    let mut weighted_sum = 0.0;
    for (kind, appendage) in appendages {
        let area = appendage.area * appendage.amount as f64;
        total_area += area;
        weighted_sum += appendage.value * area;
        log::trace!(
            "{} | kind={} amount={} area={}",
            dbgid,
            kind,
            appendage.amount,
            appendage.area
        );
    }
    if !(total_area > 0.0) {
        return Err(Error::NoAppendages(format!(
            "{} | Inventory has no wetted area",
            dbgid
        )));
    }
    let equivalent_1k2 = weighted_sum / total_area;
    log::debug!(
        "{} | total_area={} equivalent_1k2={}",
        dbgid,
        total_area,
        equivalent_1k2
    );
    Ok(0.0005
        * water_density
        * speed_si.powi(2)
        * total_area
        * equivalent_1k2
        * friction_coefficient)
}
