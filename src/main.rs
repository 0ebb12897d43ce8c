use hull::appendage::standard_inventory;
use hull::HullConf;
use model::ShipModel;
use sal_sync::services::entity::dbg_id::DbgId;
pub use error::Error;
//
mod error;
mod geometry;
mod hull;
mod model;
mod physics;
mod resistance;

fn main() {
    let conf = HullConf {
        is_ocean: false,
        lpp: 59.0,
        lwl: 60.0,
        breadth: 12.0,
        draught_ap: 2.0,
        draught_fp: 2.0,
        displacement: 1074.0,
        lcb_ap: 29.71,
        transversal_bulb_area: 0.0,
        center_bulb_area: 0.0,
        cm: 0.883,
        cwp: 0.97,
        transom_area: 0.94,
        c_stern: 0.0,
        appendages: standard_inventory(),
        speeds: vec![16.0],
    };
    let dbgid = DbgId("main".to_string());
    let model = ShipModel::new(&dbgid, conf);
    match model.calculate() {
        Ok(report) => {
            let hull = &report.hull;
            println!(
                "draught={} CB={} CP={} LR={} S={} 1+k1={}",
                hull.draught, hull.cb, hull.cp, hull.lr, hull.wetted_surface, hull.form_factor
            );
            for (speed, entry) in report.iter() {
                match entry {
                    Ok(record) => println!(
                        "speed={} kn | RF={} N, (1+k1)*RF={} N, RAPP={:?}",
                        speed, record.frictional, record.viscous, record.appendages
                    ),
                    Err(err) => println!("speed={} kn | {:?}", speed, err),
                }
            }
        }
        Err(err) => log::error!("{} | {:?}", dbgid, err),
    }
}
