//! Test runner for executing scenario suites
//!
//! Manages scenario execution, result collection, and reporting.

use std::time::{Duration, Instant};

use anyhow::Result;
use serde::Serialize;

use crate::harness::{TestContext, TestHarness, TestResult};

type ScenarioFn = Box<dyn FnOnce(&mut TestContext) -> Result<()>>;

/// A single scenario
pub struct TestCase {
    /// Scenario name
    pub name: String,
    /// Suite the scenario belongs to
    pub category: String,
    /// Scenario body
    pub test_fn: ScenarioFn,
}

impl TestCase {
    pub fn new<F>(name: &str, category: &str, test_fn: F) -> Self
    where
        F: FnOnce(&mut TestContext) -> Result<()> + 'static,
    {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            test_fn: Box::new(test_fn),
        }
    }
}

/// Result of running a scenario
#[derive(Debug, Serialize)]
pub struct TestRun {
    /// Scenario name
    pub name: String,
    /// Suite name
    pub category: String,
    /// Outcome
    pub result: TestResult,
    /// Time taken
    pub duration: Duration,
}

impl TestRun {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Suite containing multiple scenarios
pub struct TestSuite {
    /// Suite name
    pub name: String,
    /// Scenarios
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) -> Result<()> + 'static,
    {
        self.cases.push(TestCase::new(name, &self.name, test_fn));
        self
    }
}

/// Runner for executing suites
pub struct TestRunner {
    /// Test harness
    harness: TestHarness,
    /// Suites to run
    suites: Vec<TestSuite>,
    /// Filter pattern (None = run all)
    filter: Option<String>,
}

impl TestRunner {
    /// Create a new runner
    pub fn new() -> Result<Self> {
        Ok(Self::with_harness(TestHarness::new()?))
    }

    /// Create with custom harness
    pub fn with_harness(harness: TestHarness) -> Self {
        Self {
            harness,
            suites: Vec::new(),
            filter: None,
        }
    }

    /// Add a suite
    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Set a filter pattern
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    /// Run all scenarios
    pub fn run(&mut self) -> RunResult {
        let start = Instant::now();
        let mut results = Vec::new();

        for suite in self.suites.drain(..) {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                if let Some(ref pattern) = self.filter {
                    if !case.name.contains(pattern) && !case.category.contains(pattern) {
                        continue;
                    }
                }

                let test_start = Instant::now();
                let full_name = format!("{}::{}", case.category, case.name);
                tracing::debug!("Running scenario: {}", full_name);

                let result = self.harness.run_test(&full_name, case.test_fn);
                let duration = test_start.elapsed();

                match &result {
                    TestResult::Passed => tracing::info!("  ✓ {} ({:?})", case.name, duration),
                    TestResult::Failed { reason } => {
                        tracing::error!("  ✗ {} ({:?}): {}", case.name, duration, reason)
                    }
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                    duration,
                });
            }
        }

        RunResult::new(results, start.elapsed())
    }

    /// Get the harness
    pub fn harness(&self) -> &TestHarness {
        &self.harness
    }
}

/// Results from running scenarios
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Individual results
    pub results: Vec<TestRun>,
    /// Total time taken
    pub duration: Duration,
}

impl RunResult {
    pub fn new(results: Vec<TestRun>, duration: Duration) -> Self {
        Self { results, duration }
    }

    /// Count of passed scenarios
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    /// Count of failed scenarios
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_passed()).count()
    }

    /// Total scenario count
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// All scenarios passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.is_passed())
    }

    /// Failed runs with their reasons, in run order
    pub fn failures(&self) -> impl Iterator<Item = (&TestRun, &str)> + '_ {
        self.results.iter().filter_map(|run| match &run.result {
            TestResult::Failed { reason } => Some((run, reason.as_str())),
            TestResult::Passed => None,
        })
    }

    /// `(suite, passed, total)` per suite, in run order
    pub fn suite_tallies(&self) -> Vec<(&str, usize, usize)> {
        let mut tallies: Vec<(&str, usize, usize)> = Vec::new();
        for run in &self.results {
            let passed = usize::from(run.is_passed());
            match tallies.last_mut() {
                Some((suite, ok, total)) if *suite == run.category.as_str() => {
                    *ok += passed;
                    *total += 1;
                }
                _ => tallies.push((run.category.as_str(), passed, 1)),
            }
        }
        tallies
    }

    /// Report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print one line per suite, then any failures
    pub fn print_summary(&self) {
        println!();
        for (suite, passed, total) in self.suite_tallies() {
            println!("{:<12} {}/{}", suite, passed, total);
        }
        println!(
            "{} passed, {} failed in {:.2?}",
            self.passed(),
            self.failed(),
            self.duration
        );

        for (run, reason) in self.failures() {
            println!("FAILED {}::{}: {}", run.category, run.name, reason);
        }
    }
}
