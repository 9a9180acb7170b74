//! Scenario Runner
//!
//! Command-line tool for running presskit's host-simulation scenarios.
//!
//! Usage:
//!   presskit-scenarios              # Run all scenarios
//!   presskit-scenarios --filter foo # Run scenarios matching "foo"
//!   presskit-scenarios --list       # List all scenarios
//!   presskit-scenarios --json       # Print a JSON report

use anyhow::Result;
use clap::Parser;
use presskit_core::IdStrategy;
use presskit_test_suite::harness::{init_logging, TestHarness, TestHarnessConfig};
use presskit_test_suite::{runner::TestRunner, tests};

#[derive(Parser, Debug)]
#[command(name = "presskit-scenarios", about = "Run presskit host-simulation scenarios")]
struct Args {
    /// List all scenarios and exit
    #[arg(long)]
    list: bool,

    /// Run only scenarios whose name or suite contains this pattern
    #[arg(long)]
    filter: Option<String>,

    /// Allocate uuid-based ids instead of sequential ones
    #[arg(long)]
    uuid_ids: bool,

    /// Print the report as JSON instead of per-suite lines
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_logging("info");
    let args = Args::parse();

    if args.list {
        println!("Available scenario suites:");
        for suite in tests::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    let config = TestHarnessConfig {
        id_strategy: if args.uuid_ids {
            IdStrategy::Uuid
        } else {
            IdStrategy::Sequential
        },
        ..TestHarnessConfig::default()
    };
    let mut runner = TestRunner::with_harness(TestHarness::with_config(config)?);

    for suite in tests::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = args.filter {
        if !args.json {
            println!("Running scenarios matching: {}\n", pattern);
        }
        runner.filter(pattern);
    }

    let result = runner.run();

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        result.print_summary();
    }

    if result.all_passed() {
        if !args.json {
            println!("\nAll scenarios passed!");
        }
        Ok(())
    } else {
        std::process::exit(1);
    }
}
