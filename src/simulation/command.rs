use std::path::PathBuf;

use crate::core::config::{SimulationConfig, SizeBasis};
use crate::core::range::QueryRange;

/// A structured invocation of the query tool: program plus positional arguments.
///
/// Arguments are passed straight to the process, never through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl std::fmt::Display for QueryCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

fn flag(on: bool) -> String {
    String::from(if on { "1" } else { "0" })
}

/// Build the query tool invocation for one target genome over `range`.
///
/// Positional layout:
///
/// ```text
/// <lod> <tgtGenome> <refGenome> <refSequence> <first> <last> <bigQuery 0|1> <doDupes 0|1> [udc]
/// ```
#[must_use]
pub fn build_command(
    config: &SimulationConfig,
    tgt_genome: &str,
    range: QueryRange,
) -> QueryCommand {
    let compared = match config.size_basis {
        SizeBasis::Range => range.len(),
        SizeBasis::Reference => config.ref_length,
    };

    let mut args = vec![
        config.lod.display().to_string(),
        tgt_genome.to_string(),
        config.ref_genome.clone(),
        config.ref_sequence.clone(),
        range.first.to_string(),
        range.last.to_string(),
        flag(compared >= config.max_snp),
        flag(config.do_dupes),
    ];
    if let Some(udc) = &config.udc {
        args.push(udc.clone());
    }

    QueryCommand {
        program: config.tool.clone(),
        args,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::new(
            "/data/alignment.lod",
            "hg19",
            "chr1",
            1000,
            vec!["mm10".to_string(), "panTro4".to_string()],
        )
        .unwrap()
        .with_max_snp(500)
    }

    #[test]
    fn test_positional_layout() {
        let cmd = build_command(&config(), "mm10", QueryRange::new(10, 20));

        assert_eq!(cmd.program, PathBuf::from("./blockVizTime"));
        assert_eq!(
            cmd.args,
            vec!["/data/alignment.lod", "mm10", "hg19", "chr1", "10", "20", "0", "0"]
        );
        assert_eq!(
            cmd.to_string(),
            "./blockVizTime /data/alignment.lod mm10 hg19 chr1 10 20 0 0"
        );
    }

    #[test]
    fn test_udc_appended_only_when_set() {
        let with_udc = config().with_udc(Some("/tmp/udcCache".to_string()));
        let cmd = build_command(&with_udc, "panTro4", QueryRange::new(0, 5));
        assert_eq!(cmd.args.len(), 9);
        assert_eq!(cmd.args.last().map(String::as_str), Some("/tmp/udcCache"));

        let cmd = build_command(&config(), "panTro4", QueryRange::new(0, 5));
        assert_eq!(cmd.args.len(), 8);
        assert!(cmd.args[6..].iter().all(|f| f == "0" || f == "1"));
    }

    #[test]
    fn test_size_flag_uses_range_length() {
        let config = config();
        assert_eq!(build_command(&config, "mm10", QueryRange::new(0, 500)).args[6], "1");
        assert_eq!(build_command(&config, "mm10", QueryRange::new(100, 1000)).args[6], "1");
        assert_eq!(build_command(&config, "mm10", QueryRange::new(1, 500)).args[6], "0");
        assert_eq!(build_command(&config, "mm10", QueryRange::new(501, 1000)).args[6], "0");
    }

    #[test]
    fn test_size_flag_reference_basis() {
        let config = config().with_size_basis(SizeBasis::Reference);
        // 1000 >= 500 regardless of the range
        assert_eq!(build_command(&config, "mm10", QueryRange::new(0, 1)).args[6], "1");

        let config = config.with_max_snp(50_000);
        assert_eq!(build_command(&config, "mm10", QueryRange::new(0, 1000)).args[6], "0");
    }

    #[test]
    fn test_dupes_flag() {
        let cmd = build_command(&config().with_do_dupes(true), "mm10", QueryRange::new(0, 1));
        assert_eq!(cmd.args[7], "1");
    }
}
