//! Scenario suites organized by category

pub mod surfaces;

use crate::runner::TestSuite;

/// Create all scenario suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        interaction::suite(),
        identity::suite(),
        slots::suite(),
        surfaces::suite(),
    ]
}

#[cfg(test)]
mod run_all {
    use super::*;
    use crate::harness::init_logging;
    use crate::runner::TestRunner;

    #[test]
    fn test_all_scenarios_pass() {
        init_logging("warn");
        let mut runner = TestRunner::new().unwrap();
        for suite in all_suites() {
            runner.add_suite(suite);
        }
        let result = runner.run();

        let failures: Vec<String> = result
            .failures()
            .map(|(run, reason)| format!("{}::{}: {}", run.category, run.name, reason))
            .collect();
        assert!(failures.is_empty(), "failed scenarios:\n{}", failures.join("\n"));
        assert!(result.total() > 20);
    }

    #[test]
    fn test_scenario_names_are_unique() {
        let mut names: Vec<String> = all_suites()
            .iter()
            .flat_map(|suite| suite.cases.iter().map(|c| format!("{}::{}", c.category, c.name)))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
