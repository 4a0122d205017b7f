use rand::Rng;
use tracing::debug;

use crate::core::config::SimulationConfig;
use crate::core::range::{generate_uniform_ranges, QueryRange, TrialResult};
use crate::simulation::command::build_command;
use crate::simulation::runner::{time_invocation, CommandRunner, ExecutionError};

/// Query every target genome over `range` and return the summed elapsed seconds.
///
/// Targets run sequentially in configured order.
///
/// # Errors
///
/// Returns the first `ExecutionError`; remaining targets are not queried.
pub fn simulate_one_query<R: CommandRunner + ?Sized>(
    config: &SimulationConfig,
    range: QueryRange,
    runner: &mut R,
) -> Result<f64, ExecutionError> {
    let mut elapsed = 0.0;
    for tgt_genome in &config.tgt_genomes {
        let command = build_command(config, tgt_genome, range);
        elapsed += time_invocation(runner, &command)?;
    }
    Ok(elapsed)
}

/// Generate `config.reps` random ranges and time each one.
///
/// All ranges are drawn before any command runs. Results are returned in
/// generation order.
///
/// # Errors
///
/// Any failed invocation aborts the run; results gathered so far are dropped.
pub fn run_simulation<G, R>(
    config: &SimulationConfig,
    rng: &mut G,
    runner: &mut R,
) -> Result<Vec<TrialResult>, ExecutionError>
where
    G: Rng + ?Sized,
    R: CommandRunner + ?Sized,
{
    let ranges = generate_uniform_ranges(config, rng);
    let mut results = Vec::with_capacity(ranges.len());

    for (i, range) in ranges.into_iter().enumerate() {
        let elapsed_seconds = simulate_one_query(config, range, runner)?;
        debug!(
            "trial {}/{}: {}:{} ({} bp) in {:.6}s",
            i + 1,
            config.reps,
            config.ref_sequence,
            range,
            range.len(),
            elapsed_seconds
        );
        results.push(TrialResult {
            range_length: range.len(),
            elapsed_seconds,
        });
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::command::QueryCommand;
    use crate::simulation::runner::RecordingRunner;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Succeeds until `fail_after` commands have run, then returns a non-zero exit
    struct FailingRunner {
        calls: usize,
        fail_after: usize,
    }

    impl CommandRunner for FailingRunner {
        fn execute(&mut self, command: &QueryCommand) -> Result<(), ExecutionError> {
            self.calls += 1;
            if self.calls > self.fail_after {
                return Err(ExecutionError::NonZeroExit {
                    command: command.to_string(),
                    code: Some(2),
                    stderr: "boom".to_string(),
                });
            }
            Ok(())
        }
    }

    fn config(reps: usize) -> SimulationConfig {
        SimulationConfig::new(
            "a.lod",
            "hg19",
            "chr1",
            1000,
            vec!["mm10".to_string(), "panTro4".to_string()],
        )
        .unwrap()
        .with_reps(reps)
        .unwrap()
    }

    #[test]
    fn test_one_query_invokes_each_target() {
        let config = config(1).with_max_snp(500);
        let mut runner = RecordingRunner::default();
        let range = QueryRange::new(250, 750);

        let elapsed = simulate_one_query(&config, range, &mut runner).unwrap();

        assert!(elapsed >= 0.0);
        assert_eq!(runner.commands.len(), 2);
        assert_eq!(runner.commands[0].args[1], "mm10");
        assert_eq!(runner.commands[1].args[1], "panTro4");
        for cmd in &runner.commands {
            assert_eq!(cmd.args[4..8], ["250", "750", "1", "0"]);
        }
    }

    #[test]
    fn test_run_returns_one_result_per_rep() {
        let mut runner = RecordingRunner::default();
        let mut rng = StdRng::seed_from_u64(5);

        let results = run_simulation(&config(5), &mut rng, &mut runner).unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(runner.commands.len(), 10);
        assert!(results.iter().all(|r| r.elapsed_seconds >= 0.0));
        assert!(results.iter().all(|r| (1..=1000).contains(&r.range_length)));
    }

    #[test]
    fn test_results_follow_generated_ranges() {
        let config = config(8);
        let expected = generate_uniform_ranges(&config, &mut StdRng::seed_from_u64(11));

        let mut runner = RecordingRunner::default();
        let results =
            run_simulation(&config, &mut StdRng::seed_from_u64(11), &mut runner).unwrap();

        let lengths: Vec<u64> = results.iter().map(|r| r.range_length).collect();
        let expected_lengths: Vec<u64> = expected.iter().map(QueryRange::len).collect();
        assert_eq!(lengths, expected_lengths);

        // both targets of a trial see the same range
        for (pair, range) in runner.commands.chunks(2).zip(&expected) {
            for cmd in pair {
                assert_eq!(cmd.args[4], range.first.to_string());
                assert_eq!(cmd.args[5], range.last.to_string());
            }
        }
    }

    #[test]
    fn test_failure_aborts_run() {
        let mut runner = FailingRunner {
            calls: 0,
            fail_after: 3,
        };
        let mut rng = StdRng::seed_from_u64(9);

        let err = run_simulation(&config(10), &mut rng, &mut runner).unwrap_err();

        assert!(matches!(err, ExecutionError::NonZeroExit { code: Some(2), .. }));
        assert_eq!(runner.calls, 4);
    }
}
