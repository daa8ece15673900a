use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use erlang_core::Scenario;

/// ErlangCalc - Erlang-B teletraffic calculator
#[derive(Debug, Parser)]
#[command(name = "erlang_cli", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print the result as JSON after the report
    #[arg(long, global = true)]
    pub json: bool,

    /// Solver settings file (TOML); missing keys use defaults
    #[arg(long, global = true, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Print the sampled curve points
    #[arg(long, global = true)]
    pub curve: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Blocking probability of an existing trunk group
    Blocking {
        /// Number of channels
        #[arg(short = 'n', long)]
        channels: u32,
        /// Offered traffic in Erlangs
        #[arg(short = 'a', long)]
        traffic: f64,
    },

    /// Minimum channels for a traffic load and grade of service
    Channels {
        /// Offered traffic in Erlangs
        #[arg(short = 'a', long)]
        traffic: f64,
        /// Target blocking in percent
        #[arg(short = 'p', long)]
        target: f64,
    },

    /// Maximum traffic a trunk group carries at a grade of service
    Traffic {
        /// Number of channels
        #[arg(short = 'n', long)]
        channels: u32,
        /// Target blocking in percent
        #[arg(short = 'p', long)]
        target: f64,
    },

    /// Offered traffic from a subscriber population
    Population {
        /// Number of subscribers
        #[arg(long)]
        population: u64,
        /// Calls per subscriber per hour
        #[arg(long)]
        call_rate: f64,
        /// Average call duration in minutes
        #[arg(long)]
        duration: f64,
    },

    /// Solve a scenario read from a JSON file ("-" for stdin)
    Solve(ScenarioFile),

    /// Sensitivity study: re-solve a JSON scenario at scaled inputs
    Simulate(ScenarioFile),
}

#[derive(Debug, Args)]
pub struct ScenarioFile {
    /// Path to a JSON scenario, e.g. {"calculation_type": "channels", "traffic": 10, "target_blocking_percent": 2}
    pub path: PathBuf,
}

impl Command {
    /// The scenario named directly on the command line, if any.
    pub fn inline_scenario(&self) -> Option<Scenario> {
        match *self {
            Command::Blocking { channels, traffic } => Some(Scenario::BlockingUnknown { channels, traffic }),
            Command::Channels { traffic, target } => Some(Scenario::ChannelsUnknown {
                traffic,
                target_blocking_percent: target,
            }),
            Command::Traffic { channels, target } => Some(Scenario::TrafficUnknown {
                channels,
                target_blocking_percent: target,
            }),
            Command::Population {
                population,
                call_rate,
                duration,
            } => Some(Scenario::PopulationDerived {
                population,
                call_rate_per_hour: call_rate,
                avg_duration_minutes: duration,
            }),
            Command::Solve(_) | Command::Simulate(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channels() {
        let cli = Cli::try_parse_from(["erlang_cli", "channels", "-a", "10", "-p", "2", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command.inline_scenario(),
            Some(Scenario::ChannelsUnknown {
                traffic: 10.0,
                target_blocking_percent: 2.0
            })
        );
    }

    #[test]
    fn test_parse_population() {
        let cli = Cli::try_parse_from([
            "erlang_cli",
            "population",
            "--population",
            "10000",
            "--call-rate",
            "2",
            "--duration",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command.inline_scenario(),
            Some(Scenario::PopulationDerived { population: 10_000, .. })
        ));
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["erlang_cli", "traffic", "-n", "20"]).is_err());
    }

    #[test]
    fn test_solve_takes_path() {
        let cli = Cli::try_parse_from(["erlang_cli", "solve", "scenario.json"]).unwrap();
        assert!(cli.command.inline_scenario().is_none());
    }
}
