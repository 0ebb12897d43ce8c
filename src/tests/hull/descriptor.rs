use super::*;
use crate::hull::appendage::standard_inventory;
use debugging::session::debug_session::{Backtrace, DebugSession, LogLevel};
use sal_sync::services::entity::dbg_id::DbgId;
use std::{sync::Once, time::Duration};
use testing::stuff::max_test_duration::TestDuration;
//
//
static INIT: Once = Once::new();
///
/// Once called initialisation.
fn init_once() {
    //
    // Implement your initialisation code to be called only once for current test file.
    INIT.call_once(|| {})
}
///
/// Returns the reference hull, the 60 m river hull of Holtrop's worked example.
fn init_each() -> HullConf {
    HullConf {
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
    }
}
///
/// Relative tolerance of the reference values.
fn approx_eq(result: f64, target: f64) -> bool {
    if target == 0.0 {
        return result.abs() < 1e-9;
    }
    ((result - target) / target).abs() < 1e-6
}
///
/// Canonical parameters of the reference hull.
#[test]
fn descriptor_reference_hull() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let conf = init_each();
    let dbgid = DbgId("descriptor_reference_hull".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let result = HullDescriptor::new(&dbgid, &conf).unwrap();
    #[rustfmt::skip]
    let test_data = [
        // 0
        ("draught", result.draught, 2.0),
        ("CB", result.cb, 0.7458333333333333),
        ("CP", result.cp, 0.8446583616459041),
        ("LCB_midship", result.lcb_midship, 1.1833333333333333),
        ("LWL", result.lwl, 60.0),
        // 5
        ("breadth", result.breadth, 12.0),
        ("displacement", result.displacement, 1074.0),
        ("CM", result.cm, 0.883),
        ("CWP", result.cwp, 0.97),
        ("C_STERN", result.c_stern, 0.0),
    ];
    for (step, (name, result, target)) in test_data.into_iter().enumerate() {
        println!("step={} {} result={} target={}", step, name, result, target);
        assert!(
            approx_eq(result, target),
            "step={} {} result={} target={}",
            step, name, result, target
        );
    }
    test_duration.exit();
}
///
/// Non-positive principal dimensions are rejected, never emitted as NaN/inf.
#[test]
fn descriptor_invalid_geometry() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    let conf = init_each();
    let dbgid = DbgId("descriptor_invalid_geometry".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data: [(&str, Box<dyn Fn(&mut HullConf)>); 7] = [
        // 0
        ("zero LWL", Box::new(|conf| conf.lwl = 0.0)),
        ("negative LWL", Box::new(|conf| conf.lwl = -60.0)),
        ("NaN LWL", Box::new(|conf| conf.lwl = f64::NAN)),
        ("zero breadth", Box::new(|conf| conf.breadth = 0.0)),
        ("zero draughts", Box::new(|conf| {
            conf.draught_ap = 0.0;
            conf.draught_fp = 0.0;
        })),
        // 5
        ("zero displacement", Box::new(|conf| conf.displacement = 0.0)),
        ("zero CM", Box::new(|conf| conf.cm = 0.0)),
    ];
    for (step, (name, break_conf)) in test_data.into_iter().enumerate() {
        let mut conf = conf.clone();
        break_conf(&mut conf);
        let result = HullDescriptor::new(&dbgid, &conf);
        println!("step={} {} result={:?}", step, name, result);
        assert!(
            matches!(result, Err(Error::InvalidHullGeometry(_))),
            "step={} {} result={:?}",
            step, name, result
        );
    }
    test_duration.exit();
}
