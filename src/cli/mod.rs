//! Command-line interface for block-viz-bench.
//!
//! Times simulated genome browser queries by running the block query tool
//! (`blockVizTime` by default) over random ranges of a reference sequence,
//! once per target genome.
//!
//! ## Usage
//!
//! ```text
//! # 100 random chr1 queries of hg19 against mouse and chimp
//! block-viz-bench alignment.lod hg19 chr1 249250621 mm10,panTro4
//!
//! # Reproducible run through a UDC cache, with duplications
//! block-viz-bench alignment.lod hg19 chr1 249250621 mm10 --reps 20 --seed 7 \
//!     --udc /tmp/udcCache --do-dupes
//!
//! # Print the commands that would run
//! block-viz-bench alignment.lod hg19 chr1 1000 mm10 --reps 3 --dry-run
//! ```

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::core::config::{
    SimulationConfig, SizeBasis, DEFAULT_MAX_SNP, DEFAULT_REPS, DEFAULT_TOOL,
};
use crate::report::{format_json, format_text, format_tsv, SimulationReport};
use crate::simulation::engine::run_simulation;
use crate::simulation::runner::{CommandRunner, DryRunRunner, ProcessRunner};
use crate::utils::validation::parse_target_genomes;

#[derive(Parser)]
#[command(name = "block-viz-bench")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Time some simulated browser queries")]
#[command(
    long_about = "Simulates genome browser track queries against an alignment index and times them.\n\nFor each repetition a random range of the reference sequence is drawn, the query tool is run once per target genome over that range, and the summed wall-clock time is recorded alongside the range length."
)]
pub struct Cli {
    /// Input LOD or HAL path
    pub lod: PathBuf,

    /// Name of reference genome
    pub ref_genome: String,

    /// Name of reference sequence
    pub ref_sequence: String,

    /// Length of reference sequence
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub ref_length: u64,

    /// Comma-separated list of target genomes
    pub tgt_genomes: String,

    /// Number of queries to perform
    #[arg(long, default_value_t = DEFAULT_REPS)]
    pub reps: usize,

    /// UDC cache path passed to the query tool
    #[arg(long)]
    pub udc: Option<String>,

    /// Do duplications
    #[arg(long, alias = "doDupes")]
    pub do_dupes: bool,

    /// Query size at or above which base-level (SNP) detail is skipped
    #[arg(long, alias = "maxSnp", default_value_t = DEFAULT_MAX_SNP)]
    pub max_snp: u64,

    /// Length compared against --max-snp: the query range, or the whole reference sequence
    #[arg(long, value_enum, default_value = "range")]
    pub size_basis: SizeBasis,

    /// Query tool to invoke
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: PathBuf,

    /// Random seed (a random one is chosen and logged if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print commands to stderr instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

impl Cli {
    /// Validate the arguments into a `SimulationConfig`
    ///
    /// # Errors
    ///
    /// Returns an error if the target list is malformed or `--reps` is zero.
    pub fn to_config(&self) -> anyhow::Result<SimulationConfig> {
        let tgt_genomes = parse_target_genomes(&self.tgt_genomes)?;
        let config = SimulationConfig::new(
            self.lod.clone(),
            self.ref_genome.clone(),
            self.ref_sequence.clone(),
            self.ref_length,
            tgt_genomes,
        )?
        .with_reps(self.reps)?
        .with_udc(self.udc.clone())
        .with_do_dupes(self.do_dupes)
        .with_max_snp(self.max_snp)
        .with_size_basis(self.size_basis)
        .with_tool(self.tool.clone());
        Ok(config)
    }
}

/// Execute a simulation run and print the results to stdout
///
/// # Errors
///
/// Returns an error if the arguments are invalid or any query tool invocation fails.
#[allow(clippy::needless_pass_by_value)]
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.to_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(
        "Simulating {} queries of {}:{} (length {}) against {} with seed {}",
        config.reps,
        config.ref_genome,
        config.ref_sequence,
        config.ref_length,
        config.tgt_genomes.join(","),
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut runner: Box<dyn CommandRunner> = if cli.dry_run {
        Box::new(DryRunRunner)
    } else {
        Box::new(ProcessRunner)
    };

    let started_at = Utc::now();
    let trials = run_simulation(&config, &mut rng, runner.as_mut())?;
    let report = SimulationReport {
        started_at,
        seed,
        config,
        trials,
    };
    info!(
        "Completed {} queries in {:.3}s",
        report.trials.len(),
        report.total_seconds()
    );

    match cli.format {
        OutputFormat::Text => println!("{}", format_text(&report.trials)),
        OutputFormat::Json => println!("{}", format_json(&report)?),
        OutputFormat::Tsv => print!("{}", format_tsv(&report.trials)),
    }

    Ok(())
}
