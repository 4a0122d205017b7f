//! Centralized validation and helper functions for command-line input.

use crate::core::config::ConfigError;

/// Split a comma-separated target genome list.
///
/// Surrounding whitespace is trimmed from each name. Empty names are rejected
/// rather than silently dropped, so `"mm10,,rn5"` is an error.
///
/// # Examples
///
/// ```
/// use block_viz_bench::utils::validation::parse_target_genomes;
///
/// assert_eq!(parse_target_genomes("mm10,panTro4").unwrap(), vec!["mm10", "panTro4"]);
/// assert!(parse_target_genomes("").is_err());
/// ```
///
/// # Errors
///
/// Returns `ConfigError::EmptyTargetGenomes` for blank input, or
/// `ConfigError::EmptyTargetGenome` with the position of the first empty name.
pub fn parse_target_genomes(list: &str) -> Result<Vec<String>, ConfigError> {
    if list.trim().is_empty() {
        return Err(ConfigError::EmptyTargetGenomes);
    }

    list.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(idx, name)| {
            if name.is_empty() {
                Err(ConfigError::EmptyTargetGenome(idx))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_genomes() {
        assert_eq!(parse_target_genomes("mm10").unwrap(), vec!["mm10"]);
        assert_eq!(
            parse_target_genomes(" mm10 , panTro4,rn5").unwrap(),
            vec!["mm10", "panTro4", "rn5"]
        );
    }

    #[test]
    fn test_parse_target_genomes_rejects_empty() {
        assert_eq!(
            parse_target_genomes("   ").unwrap_err(),
            ConfigError::EmptyTargetGenomes
        );
        assert_eq!(
            parse_target_genomes("mm10,,rn5").unwrap_err(),
            ConfigError::EmptyTargetGenome(1)
        );
        assert_eq!(
            parse_target_genomes("mm10,").unwrap_err(),
            ConfigError::EmptyTargetGenome(1)
        );
    }
}
