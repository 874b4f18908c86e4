//! # Board Fields
//!
//! Write-once memory mode, the acceleration slot, and warning bookkeeping.

use boardsim_core::common::{ConfigError, ConfigWarning};
use boardsim_core::processor::AccelerationContext;
use boardsim_core::sim::SimObject;
use boardsim_core::soc::{Board, CacheHierarchy, ClassicCache, MemMode, NoCache, RubyCache};
use std::sync::Arc;

#[test]
fn hierarchy_capabilities() {
    assert!(!NoCache.is_ruby());
    assert!(!ClassicCache.is_ruby());
    let ruby = RubyCache::new("CHI");
    assert!(ruby.is_ruby());
    assert_eq!(ruby.protocol(), "CHI");
    assert_eq!(ruby.name(), "ruby");
}

#[test]
fn mem_mode_is_write_once() {
    let mut board = Board::new(Box::new(NoCache));
    assert_eq!(board.mem_mode(), None);
    board.set_mem_mode(MemMode::Timing).unwrap();
    board.set_mem_mode(MemMode::Timing).unwrap();
    assert!(matches!(
        board.set_mem_mode(MemMode::Atomic),
        Err(ConfigError::MemoryModeConflict {
            current: MemMode::Timing,
            requested: MemMode::Atomic
        })
    ));
    assert_eq!(board.mem_mode(), Some(MemMode::Timing));
}

#[test]
fn same_context_may_be_attached_twice() {
    let mut board = Board::new(Box::new(ClassicCache));
    let context = Arc::new(AccelerationContext::new("kvm"));
    board.attach_acceleration_context(Arc::clone(&context)).unwrap();
    board.attach_acceleration_context(Arc::clone(&context)).unwrap();
    assert_eq!(Arc::strong_count(&context), 2);
    assert!(matches!(
        board.attach_acceleration_context(Arc::new(AccelerationContext::new("kvm"))),
        Err(ConfigError::AccelerationContextConflict)
    ));
}

#[test]
fn warnings_are_deduplicated() {
    let mut board = Board::new(Box::new(RubyCache::new("MESI_Two_Level")));
    board.record_warning(ConfigWarning::AtomicCoreWithRuby);
    board.record_warning(ConfigWarning::AtomicCoreWithRuby);
    assert_eq!(board.warnings(), &[ConfigWarning::AtomicCoreWithRuby]);
}

#[test]
fn objects_keep_insertion_order() {
    let board = Board::new(Box::new(NoCache))
        .with_object(SimObject::new("memory"))
        .with_object(SimObject::new("iobus"));
    let names: Vec<&str> = board.objects().iter().map(SimObject::name).collect();
    assert_eq!(names, ["memory", "iobus"]);
}

#[test]
fn mem_mode_display_matches_parameter_names() {
    assert_eq!(MemMode::Timing.to_string(), "timing");
    assert_eq!(MemMode::Atomic.to_string(), "atomic");
    assert_eq!(MemMode::AtomicNonCaching.to_string(), "atomic_noncaching");
}
