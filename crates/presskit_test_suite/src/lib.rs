//! presskit Scenario Suite
//!
//! Host-simulation testing for the presskit button engine. Scenarios mount
//! buttons against a shared allocator, render them through a reference
//! skin, query the output tree by attribute and fire simulated gestures.
//!
//! # Scenario Categories
//!
//! - **interaction**: click, touch end and press reach callbacks only while
//!   the control is enabled
//! - **identity**: ids are stable across re-renders, unique across mounts and
//!   released on unmount
//! - **slots**: icon, main and container composition and empty fallbacks
//! - **surfaces**: what one tap does on each host surface

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{
    init_logging, reference_skin, EventRecorder, Gestures, Screen, TestContext, TestHarness,
    TestResult,
};
pub use runner::TestRunner;
