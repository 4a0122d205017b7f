//! # block-viz-bench
//!
//! A load simulator for genome browser alignment queries.
//!
//! Browser tracks built on a multiple alignment (HAL or a LOD index of one)
//! fetch alignment blocks for whatever window the user is looking at. This
//! crate approximates that load without a browser: it draws random windows on
//! a reference sequence, runs an external block query tool once per target
//! genome over each window, and records how long each window took.
//!
//! ## Example
//!
//! ```rust,no_run
//! use block_viz_bench::{run_simulation, ProcessRunner, SimulationConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SimulationConfig::new(
//!     "alignment.lod",
//!     "hg19",
//!     "chr1",
//!     249_250_621,
//!     vec!["mm10".to_string(), "panTro4".to_string()],
//! )
//! .unwrap()
//! .with_reps(10)
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let trials = run_simulation(&config, &mut rng, &mut ProcessRunner).unwrap();
//! for t in trials {
//!     println!("{}\t{:.3}", t.range_length, t.elapsed_seconds);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: configuration, query ranges, and trial results
//! - [`simulation`]: command construction, execution, and the run loop
//! - [`report`]: text, JSON, and TSV output
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod report;
pub mod simulation;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::config::{ConfigError, SimulationConfig, SizeBasis};
pub use crate::core::range::{generate_uniform_ranges, QueryRange, TrialResult};
pub use crate::simulation::command::{build_command, QueryCommand};
pub use crate::simulation::engine::{run_simulation, simulate_one_query};
pub use crate::simulation::runner::{
    time_invocation, CommandRunner, DryRunRunner, ExecutionError, ProcessRunner,
};
