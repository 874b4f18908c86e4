//! # Clock Calibration
//!
//! `pre_instantiate` must only touch the global clock when an accelerated
//! core is reachable, including through inactive switchable sets.

use boardsim_core::core::CpuCapability;
use boardsim_core::processor::{Calibration, ProcessorAssembly, SwitchableCores};
use boardsim_core::sim::SimClock;

use crate::common::harness::{cores, processor};
use crate::common::mocks::backend::MockBackend;

fn switchable(sets: Vec<(&str, Vec<CpuCapability>)>, starting: &str) -> ProcessorAssembly {
    let sets = sets
        .into_iter()
        .map(|(name, caps)| {
            let built = caps
                .iter()
                .enumerate()
                .map(|(i, &cap)| crate::common::harness::core(cap, &format!("{name}{i}")))
                .collect();
            (name.to_owned(), built)
        })
        .collect();
    let sets = SwitchableCores::new(sets, starting).unwrap();
    ProcessorAssembly::switchable(sets, &MockBackend::available()).unwrap()
}

#[test]
fn no_accelerated_core_leaves_clock_untouched() {
    let p = processor(&[CpuCapability::TimingOutOfOrder, CpuCapability::TimingOutOfOrder]);
    let mut clock = SimClock::default();
    let before = clock.clone();

    assert_eq!(p.pre_instantiate(&mut clock).unwrap(), Calibration::Unchanged);
    assert_eq!(clock, before);
    assert_eq!(clock.sim_quantum(), None);
    assert!(!clock.is_frequency_fixed());
}

#[test]
fn accelerated_core_sets_one_millisecond_quantum() {
    let p = processor(&[CpuCapability::Accelerated]);
    let mut clock = SimClock::default();

    let calibration = p.pre_instantiate(&mut clock).unwrap();

    assert!(clock.is_frequency_fixed());
    assert_eq!(clock.sim_quantum(), Some(1_000_000_000));
    assert_eq!(
        calibration,
        Calibration::Calibrated {
            quantum: 1_000_000_000,
            skewed_exits: false
        }
    );
}

#[test]
fn quantum_follows_configured_frequency() {
    let p = processor(&[CpuCapability::Accelerated, CpuCapability::Accelerated]);
    let mut clock = SimClock::new(2_000_000_000).unwrap();
    let _ = p.pre_instantiate(&mut clock).unwrap();
    assert_eq!(clock.sim_quantum(), Some(2_000_000));
}

#[test]
fn calibration_is_repeatable() {
    let p = processor(&[CpuCapability::Accelerated]);
    let mut clock = SimClock::default();
    let first = p.pre_instantiate(&mut clock).unwrap();
    let second = p.pre_instantiate(&mut clock).unwrap();
    assert_eq!(first, second);
}

#[test]
fn inactive_accelerated_set_still_calibrates() {
    let p = switchable(
        vec![
            ("detail", vec![CpuCapability::TimingOutOfOrder; 2]),
            ("boot", vec![CpuCapability::Accelerated; 2]),
        ],
        "detail",
    );
    assert!(p.active_cores().iter().all(|c| !c.is_accelerated()));

    let mut clock = SimClock::default();
    let calibration = p.pre_instantiate(&mut clock).unwrap();

    assert!(clock.is_frequency_fixed());
    assert_eq!(clock.sim_quantum(), Some(1_000_000_000));
    assert_eq!(
        calibration,
        Calibration::Calibrated {
            quantum: 1_000_000_000,
            skewed_exits: true
        }
    );
}

#[test]
fn fully_accelerated_switchable_is_not_skewed() {
    let p = switchable(
        vec![
            ("a", vec![CpuCapability::Accelerated]),
            ("b", vec![CpuCapability::Accelerated]),
        ],
        "a",
    );
    let mut clock = SimClock::default();
    assert_eq!(
        p.pre_instantiate(&mut clock).unwrap(),
        Calibration::Calibrated {
            quantum: 1_000_000_000,
            skewed_exits: false
        }
    );
}

#[test]
fn switchable_without_acceleration_is_unchanged() {
    let p = switchable(
        vec![
            ("fast", vec![CpuCapability::AtomicStrict]),
            ("detail", vec![CpuCapability::TimingOutOfOrder]),
        ],
        "fast",
    );
    let mut clock = SimClock::default();
    assert_eq!(p.pre_instantiate(&mut clock).unwrap(), Calibration::Unchanged);
    assert_eq!(clock.sim_quantum(), None);
}

#[test]
fn calibration_after_frequency_fixed_elsewhere() {
    let p = ProcessorAssembly::new(cores(&[CpuCapability::Accelerated]), &MockBackend::available())
        .unwrap();
    let mut clock = SimClock::new(1_000_000).unwrap();
    clock.fix_global_frequency();
    let _ = p.pre_instantiate(&mut clock).unwrap();
    assert_eq!(clock.sim_quantum(), Some(1_000));
    assert_eq!(clock.ticks_per_second(), 1_000_000);
}
