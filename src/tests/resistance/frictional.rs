use super::*;
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
/// ITTC-57 friction coefficient at the reference Reynolds numbers.
#[test]
fn friction_coefficient_test() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = DbgId("friction_coefficient_test".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = [
        // 0
        (553042179.9178798, 0.001649628246880546),
        (276521089.9589399, 0.0018074090914176738),
        (34565136.24486749, 0.002444867112204935),
    ];
    for (step, (reynolds, target)) in test_data.into_iter().enumerate() {
        let result = friction_coefficient(&dbgid, reynolds).unwrap();
        println!("step={} reynolds={} result={} target={}", step, reynolds, result, target);
        assert!(
            approx_eq(result, target),
            "step={} reynolds={} result={} target={}",
            step, reynolds, result, target
        );
    }
    test_duration.exit();
}
///
/// Reynolds numbers below the correlation line regime are rejected.
#[test]
fn friction_coefficient_invalid_regime() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = DbgId("friction_coefficient_invalid_regime".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let test_data = [
        // 0
        0.0,
        1.0,
        0.5,
        -100.0,
        f64::NAN,
    ];
    for (step, reynolds) in test_data.into_iter().enumerate() {
        let result = friction_coefficient(&dbgid, reynolds);
        println!("step={} reynolds={} result={:?}", step, reynolds, result);
        assert!(
            matches!(result, Err(Error::InvalidSpeedRegime(_))),
            "step={} reynolds={} result={:?}",
            step, reynolds, result
        );
    }
    test_duration.exit();
}
///
/// Frictional force of the reference hull at 16 kn, river water.
#[test]
fn frictional_resistance_reference_hull() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = DbgId("frictional_resistance_reference_hull".to_string());
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(&dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let cf = friction_coefficient(&dbgid, 553042179.9178798).unwrap();
    let result = frictional_resistance(8.231111111111112, 783.0412552065748, cf, 1000.0);
    let target = 43.75801986974569;
    println!("result={} target={}", result, target);
    assert!(
        approx_eq(result, target),
        "result={} target={}",
        result, target
    );
    assert!(result > 0.0, "result={}", result);
    test_duration.exit();
}
///
/// RF scales with the speed squared while CF is held frozen.
#[test]
fn frictional_resistance_speed_squared() {
    DebugSession::init(LogLevel::Info, Backtrace::Short);
    init_once();
    init_each();
    let dbgid = "frictional_resistance_speed_squared";
    log::debug!("\n{}", dbgid);
    let test_duration = TestDuration::new(dbgid, Duration::from_secs(1));
    test_duration.run().unwrap();
    let cf = 0.001649628246880546;
    let test_data = [
        // 0
        1.0,
        2.5,
        8.231111111111112,
    ];
    for (step, speed_si) in test_data.into_iter().enumerate() {
        let single = frictional_resistance(speed_si, 783.0412552065748, cf, 1000.0);
        let doubled = frictional_resistance(2.0 * speed_si, 783.0412552065748, cf, 1000.0);
        println!("step={} speed_si={} single={} doubled={}", step, speed_si, single, doubled);
        assert!(
            approx_eq(doubled / single, 4.0),
            "step={} speed_si={} single={} doubled={}",
            step, speed_si, single, doubled
        );
    }
    test_duration.exit();
}
