//! # erlang_core - Erlang-B Teletraffic Engine
//!
//! `erlang_core` is the computational heart of ErlangCalc: given two of
//! offered traffic, channel count and blocking probability, it derives the
//! third with the Erlang-B loss formula and samples chart-ready curves
//! around the answer.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Stable**: Blocking is computed in the log domain, so large systems
//!   neither overflow nor underflow
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use erlang_core::{blocking, max_traffic, min_channels, traffic_from_population};
//!
//! // Grade of service of 18 trunks carrying 10 Erlangs
//! let b = blocking(10.0, 18);
//! assert!(b < 0.01);
//!
//! // Trunks needed for 10 Erlangs at 2%
//! assert_eq!(min_channels(10.0, 2.0).unwrap().value, 17);
//!
//! // Traffic 20 trunks carry at 1%
//! let a = max_traffic(20, 1.0).unwrap().value;
//! assert!((a - 12.03).abs() < 0.01);
//!
//! // 10 000 subscribers, 2 calls/hour, 3 minutes each
//! assert_eq!(traffic_from_population(10_000, 2.0, 3.0).unwrap().0, 1000.0);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Blocking model, solvers and the [`Scenario`] dispatcher
//! - [`curves`] - Curve sampling for charts
//! - [`simulation`] - Sensitivity studies around a scenario
//! - [`settings`] - Solver tolerances and sampling parameters
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod curves;
pub mod errors;
pub mod settings;
pub mod simulation;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::blocking::blocking;
pub use calculations::channels::min_channels;
pub use calculations::population::traffic_from_population;
pub use calculations::traffic::max_traffic;
pub use calculations::{sample_curve, solve, solve_with, Outcome, Scenario, Solution, SolverResult};
pub use curves::{Curve, CurvePoint, PopulationPoint};
pub use errors::{CalcError, CalcResult};
pub use settings::{SamplingSettings, SolverSettings};
pub use simulation::{simulate, simulate_with, SimulationReport};
