use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default external query tool, relative to the working directory
pub const DEFAULT_TOOL: &str = "./blockVizTime";

/// Default number of simulated queries
pub const DEFAULT_REPS: usize = 100;

/// Default query size at or above which the tool skips base-level (SNP) detail
pub const DEFAULT_MAX_SNP: u64 = 50_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one target genome is required")]
    EmptyTargetGenomes,

    #[error("Target genome at position {0} is empty")]
    EmptyTargetGenome(usize),

    #[error("Reference sequence length must be at least 1")]
    ZeroReferenceLength,

    #[error("Number of repetitions must be at least 1")]
    ZeroRepetitions,
}

/// Which length is compared against `max_snp` when choosing the size flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SizeBasis {
    /// Length of the query range being simulated
    #[default]
    Range,
    /// Full reference sequence length (constant for the whole run)
    Reference,
}

/// Immutable settings for one simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// LOD or HAL path handed to the query tool
    pub lod: PathBuf,

    pub ref_genome: String,

    pub ref_sequence: String,

    pub ref_length: u64,

    /// Genomes queried once each per trial, in this order
    pub tgt_genomes: Vec<String>,

    pub reps: usize,

    /// UDC cache path forwarded to the tool when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udc: Option<String>,

    pub do_dupes: bool,

    pub max_snp: u64,

    pub size_basis: SizeBasis,

    /// Program invoked for every query
    pub tool: PathBuf,
}

impl SimulationConfig {
    /// Create a config with default options.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the target list is empty or holds an empty
    /// name, or if the reference length is zero.
    pub fn new(
        lod: impl Into<PathBuf>,
        ref_genome: impl Into<String>,
        ref_sequence: impl Into<String>,
        ref_length: u64,
        tgt_genomes: Vec<String>,
    ) -> Result<Self, ConfigError> {
        if ref_length == 0 {
            return Err(ConfigError::ZeroReferenceLength);
        }
        if tgt_genomes.is_empty() {
            return Err(ConfigError::EmptyTargetGenomes);
        }
        if let Some(idx) = tgt_genomes.iter().position(|g| g.trim().is_empty()) {
            return Err(ConfigError::EmptyTargetGenome(idx));
        }

        Ok(Self {
            lod: lod.into(),
            ref_genome: ref_genome.into(),
            ref_sequence: ref_sequence.into(),
            ref_length,
            tgt_genomes,
            reps: DEFAULT_REPS,
            udc: None,
            do_dupes: false,
            max_snp: DEFAULT_MAX_SNP,
            size_basis: SizeBasis::default(),
            tool: PathBuf::from(DEFAULT_TOOL),
        })
    }

    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRepetitions` if `reps` is zero.
    pub fn with_reps(mut self, reps: usize) -> Result<Self, ConfigError> {
        if reps == 0 {
            return Err(ConfigError::ZeroRepetitions);
        }
        self.reps = reps;
        Ok(self)
    }

    #[must_use]
    pub fn with_udc(mut self, udc: Option<String>) -> Self {
        self.udc = udc;
        self
    }

    #[must_use]
    pub fn with_do_dupes(mut self, do_dupes: bool) -> Self {
        self.do_dupes = do_dupes;
        self
    }

    #[must_use]
    pub fn with_max_snp(mut self, max_snp: u64) -> Self {
        self.max_snp = max_snp;
        self
    }

    #[must_use]
    pub fn with_size_basis(mut self, size_basis: SizeBasis) -> Self {
        self.size_basis = size_basis;
        self
    }

    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<PathBuf>) -> Self {
        self.tool = tool.into();
        self
    }
}
