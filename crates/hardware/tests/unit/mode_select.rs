//! # Memory Mode Selection
//!
//! Decision table for the first-core rule, the acceleration override, and
//! properties over arbitrary core sequences.

use boardsim_core::common::{ConfigError, ConfigWarning};
use boardsim_core::core::CpuCapability;
use boardsim_core::processor::mode_select::mode_for_capability;
use boardsim_core::processor::select_memory_mode;
use boardsim_core::soc::MemMode;
use proptest::prelude::*;
use rstest::rstest;

use crate::common::harness::{count_warnings, cores};

const NON_ACCELERATED: [CpuCapability; 6] = [
    CpuCapability::AtomicStrict,
    CpuCapability::AtomicNonCaching,
    CpuCapability::TimingInOrder,
    CpuCapability::TimingOutOfOrder,
    CpuCapability::TimingMinor,
    CpuCapability::TraceReplay,
];

#[rstest]
#[case(CpuCapability::TimingInOrder, false, MemMode::Timing)]
#[case(CpuCapability::TimingInOrder, true, MemMode::Timing)]
#[case(CpuCapability::TimingOutOfOrder, false, MemMode::Timing)]
#[case(CpuCapability::TimingOutOfOrder, true, MemMode::Timing)]
#[case(CpuCapability::TimingMinor, false, MemMode::Timing)]
#[case(CpuCapability::TimingMinor, true, MemMode::Timing)]
#[case(CpuCapability::AtomicNonCaching, false, MemMode::AtomicNonCaching)]
#[case(CpuCapability::AtomicNonCaching, true, MemMode::AtomicNonCaching)]
#[case(CpuCapability::AtomicStrict, false, MemMode::Atomic)]
#[case(CpuCapability::AtomicStrict, true, MemMode::AtomicNonCaching)]
fn first_core_decides_mode(
    #[case] capability: CpuCapability,
    #[case] is_ruby: bool,
    #[case] expected: MemMode,
) {
    let selection = select_memory_mode(&cores(&[capability, capability]), is_ruby).unwrap();
    assert_eq!(selection.mode, expected);
}

#[test]
fn atomic_with_ruby_warns_exactly_once() {
    let (selection, warnings) = count_warnings(|| {
        select_memory_mode(&cores(&[CpuCapability::AtomicStrict]), true)
    });
    let selection = selection.unwrap();
    assert_eq!(selection.mode, MemMode::AtomicNonCaching);
    assert_eq!(selection.warning, Some(ConfigWarning::AtomicCoreWithRuby));
    assert_eq!(warnings, 1);
}

#[test]
fn atomic_without_ruby_does_not_warn() {
    let (selection, warnings) = count_warnings(|| {
        select_memory_mode(&cores(&[CpuCapability::AtomicStrict]), false)
    });
    let selection = selection.unwrap();
    assert_eq!(selection.mode, MemMode::Atomic);
    assert_eq!(selection.warning, None);
    assert_eq!(warnings, 0);
}

#[test]
fn accelerated_core_anywhere_overrides_first_core() {
    let seq = cores(&[
        CpuCapability::TimingOutOfOrder,
        CpuCapability::TimingOutOfOrder,
        CpuCapability::Accelerated,
    ]);
    let selection = select_memory_mode(&seq, false).unwrap();
    assert_eq!(selection.mode, MemMode::AtomicNonCaching);
}

#[test]
fn accelerated_override_skips_ruby_warning() {
    let (selection, warnings) = count_warnings(|| {
        select_memory_mode(
            &cores(&[CpuCapability::AtomicStrict, CpuCapability::Accelerated]),
            true,
        )
    });
    assert_eq!(selection.unwrap().warning, None);
    assert_eq!(warnings, 0);
}

#[test]
fn only_first_core_is_inspected() {
    let seq = cores(&[CpuCapability::AtomicStrict, CpuCapability::TimingOutOfOrder]);
    assert_eq!(select_memory_mode(&seq, false).unwrap().mode, MemMode::Atomic);

    let seq = cores(&[CpuCapability::TimingMinor, CpuCapability::TraceReplay]);
    assert_eq!(select_memory_mode(&seq, false).unwrap().mode, MemMode::Timing);
}

#[test]
fn trace_replay_first_is_unsupported() {
    let seq = cores(&[CpuCapability::TraceReplay, CpuCapability::AtomicStrict]);
    let err = select_memory_mode(&seq, false).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnsupportedConfiguration {
            capability: CpuCapability::TraceReplay
        }
    ));
}

#[test]
fn empty_sequence_is_rejected() {
    assert!(matches!(
        select_memory_mode(&[], false),
        Err(ConfigError::EmptyProcessor)
    ));
}

fn capability() -> impl Strategy<Value = CpuCapability> {
    prop::sample::select(NON_ACCELERATED.to_vec())
}

proptest! {
    #[test]
    fn any_accelerated_core_forces_noncaching(
        mut caps in prop::collection::vec(capability(), 0..6),
        position in any::<prop::sample::Index>(),
        is_ruby in any::<bool>(),
    ) {
        let at = position.index(caps.len() + 1);
        caps.insert(at, CpuCapability::Accelerated);
        let selection = select_memory_mode(&cores(&caps), is_ruby).unwrap();
        prop_assert_eq!(selection.mode, MemMode::AtomicNonCaching);
        prop_assert_eq!(selection.warning, None);
    }

    #[test]
    fn non_accelerated_mode_depends_only_on_first_core(
        caps in prop::collection::vec(capability(), 1..6),
        is_ruby in any::<bool>(),
    ) {
        let expected = mode_for_capability(caps[0], is_ruby).map(|s| s.mode).ok();
        let actual = select_memory_mode(&cores(&caps), is_ruby).map(|s| s.mode).ok();
        prop_assert_eq!(actual, expected);
    }
}
