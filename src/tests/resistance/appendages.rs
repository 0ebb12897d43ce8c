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
/// Returns:
///  - ...
#[allow(clippy::unused_unit)]
fn init_each() -> () {}
///
/// Relative tolerance of the reference values.
fn approx_eq(result: f64, target: f64) -> bool {
    ((result - target) / target).abs() < 1e-6
}
///
/// An inventory with no wetted area is rejected, not divided by.
#[test]
fn appendages_empty_inventory() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = DbgId("appendages_empty_inventory".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let zero_amounts = standard_inventory();
    let mut zero_areas = standard_inventory();
    for appendage in zero_areas.values_mut() {
        appendage.amount = 2;
    }
    let test_data = [
        // 0
        ("no entries", IndexMap::new()),
        ("all amounts zero", zero_amounts),
        ("all areas zero", zero_areas),
    ];
    for (step, (name, appendages)) in test_data.into_iter().enumerate() {
        let result = appendages_resistance(&dbgid, 8.231111111111112, &appendages, 0.0016, 1000.0);
        println!("step={} {} result={:?}", step, name, result);
        assert!(
            matches!(result, Err(Error::NoAppendages(_))),
            "step={} {} result={:?}",
            step, name, result
        );
    }
    test_duration.exit();
}
///
/// Area-weighted equivalent 1+k2 over a mixed inventory, 16 kn.
#[test]
fn appendages_resistance_mixed_inventory() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = DbgId("appendages_resistance_mixed_inventory".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let cf = 0.001649628246880546;
    let speed_si = 8.231111111111112;
    // rudder behind stern 1 x 3 m2, bilge keels 2 x 5 m2
    let mut mixed = standard_inventory();
    mixed[&AppendageKind::RudderBehindStern].amount = 1;
    mixed[&AppendageKind::RudderBehindStern].area = 3.0;
    mixed[&AppendageKind::BilgeKeels].amount = 2;
    mixed[&AppendageKind::BilgeKeels].area = 5.0;
    // shafts 2 x 3 m2 alone
    let mut single = standard_inventory();
    single[&AppendageKind::Shafts].amount = 2;
    single[&AppendageKind::Shafts].area = 3.0;
    let test_data = [
        // 0
        ("mixed", mixed, 1.0338195621337145),
        ("single type", single, 1.341171323849143),
    ];
    for (step, (name, appendages, target)) in test_data.into_iter().enumerate() {
        let result = appendages_resistance(&dbgid, speed_si, &appendages, cf, 1000.0).unwrap();
        println!("step={} {} result={} target={}", step, name, result, target);
        assert!(
            approx_eq(result, target),
            "step={} {} result={} target={}",
            step, name, result, target
        );
    }
    test_duration.exit();
}
