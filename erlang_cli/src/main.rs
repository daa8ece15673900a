//! # ErlangCalc CLI
//!
//! Terminal front end for the Erlang-B engine. Each subcommand builds a
//! [`Scenario`], hands it to `erlang_core`, and prints a short report
//! (plus the JSON result with `--json`).
//!
//! ```text
//! erlang_cli channels -a 10 -p 2
//! erlang_cli traffic -n 20 -p 1 --curve
//! erlang_cli simulate scenario.json --json
//! ```

mod cli;
mod logger;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use erlang_core::{
    simulate_with, solve_with, CalcError, Curve, Outcome, Scenario, SimulationReport, SolverResult, SolverSettings,
};

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let settings = load_settings(cli.settings.as_deref())?;

    let outcome = match &cli.command {
        Command::Solve(file) => read_scenario(&file.path)?
            .and_then(|scenario| solve_with(&scenario, &settings))
            .map(Report::Single),
        Command::Simulate(file) => read_scenario(&file.path)?
            .and_then(|scenario| simulate_with(&scenario, &settings))
            .map(Report::Study),
        command => {
            let scenario = command
                .inline_scenario()
                .context("subcommand does not describe a scenario")?;
            solve_with(&scenario, &settings).map(Report::Single)
        }
    };

    match outcome {
        Ok(report) => {
            report.print(cli.curve);
            if cli.json {
                println!();
                println!("JSON Output:");
                println!("{}", report.to_json()?);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), "calculation rejected: {}", e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(if e.is_domain_error() { 2 } else { 1 });
        }
    }
}

enum Report {
    Single(SolverResult),
    Study(SimulationReport),
}

impl Report {
    fn print(&self, with_curve: bool) {
        match self {
            Report::Single(result) => {
                print_result(result);
                if with_curve {
                    print_curve(&result.curve);
                }
            }
            Report::Study(study) => {
                print_result(&study.base);
                println!();
                println!("Sensitivity:");
                for variant in &study.variants {
                    println!(
                        "  x{:<5} {:<48} => {}{}",
                        variant.factor,
                        describe_inputs(&variant.result.scenario),
                        describe_outcome(&variant.result.outcome),
                        if variant.result.approximate { " (approx.)" } else { "" }
                    );
                }
                if with_curve {
                    print_curve(&study.base.curve);
                }
            }
        }
    }

    fn to_json(&self) -> Result<String> {
        let json = match self {
            Report::Single(result) => serde_json::to_string_pretty(result),
            Report::Study(study) => serde_json::to_string_pretty(study),
        };
        Ok(json?)
    }
}

fn load_settings(path: Option<&Path>) -> Result<SolverSettings> {
    let Some(path) = path else {
        return Ok(SolverSettings::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading settings file {}", path.display()))?;
    let settings: SolverSettings =
        toml::from_str(&text).with_context(|| format!("parsing settings file {}", path.display()))?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}

/// Read a JSON scenario from a file, or stdin for `-`.
fn read_scenario(path: &Path) -> Result<Result<Scenario, CalcError>> {
    let text = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("reading scenario from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("reading scenario file {}", path.display()))?
    };
    Ok(Scenario::from_json(&text))
}

fn print_result(result: &SolverResult) {
    println!("═══════════════════════════════════════");
    println!("  ERLANG-B {} CALCULATION", result.scenario.kind().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  {}", describe_inputs(&result.scenario));
    println!();
    println!("Result:");
    println!("  {}", describe_outcome(&result.outcome));
    if result.approximate {
        println!("  [APPROX] solver did not converge within its limits; value is a best estimate");
    }
    println!("═══════════════════════════════════════");
}

fn describe_inputs(scenario: &Scenario) -> String {
    match *scenario {
        Scenario::ChannelsUnknown {
            traffic,
            target_blocking_percent,
        } => format!("Traffic: {:.2} E, target blocking: {}%", traffic, target_blocking_percent),
        Scenario::BlockingUnknown { channels, traffic } => {
            format!("Channels: {}, traffic: {:.2} E", channels, traffic)
        }
        Scenario::TrafficUnknown {
            channels,
            target_blocking_percent,
        } => format!("Channels: {}, target blocking: {}%", channels, target_blocking_percent),
        Scenario::PopulationDerived {
            population,
            call_rate_per_hour,
            avg_duration_minutes,
        } => format!(
            "Population: {}, {:.2} calls/h, {:.2} min/call",
            population, call_rate_per_hour, avg_duration_minutes
        ),
    }
}

fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Channels(n) => format!("Channels required: {}", n),
        Outcome::Blocking(p) => format!("Blocking probability: {}", p),
        Outcome::Traffic(a) => format!("Offered traffic: {}", a),
    }
}

fn print_curve(curve: &Curve) {
    println!();
    match curve {
        Curve::Channels(points) | Curve::Traffic(points) => {
            let axis = if matches!(curve, Curve::Channels(_)) { "channels" } else { "traffic (E)" };
            println!("  {:>12}  {:>12}", axis, "blocking %");
            for point in points {
                println!(
                    "  {:>12}  {:>12.4}{}",
                    point.x,
                    point.blocking_rate,
                    if point.is_target { "  <- target" } else { "" }
                );
            }
        }
        Curve::Population(points) => {
            println!("  {:>12}  {:>12}", "population", "traffic (E)");
            for point in points {
                println!("  {:>12}  {:>12.2}", point.population, point.traffic);
            }
        }
    }
}
