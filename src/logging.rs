use flexi_logger::{opt_format, Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming};
use std::path::Path;

/// Starts the global logger. `RUST_LOG` wins over `level`; with a
/// `log_dir` the output goes to size-rotated files instead of stderr.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;
    let handle = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("holdem_mcts"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start()?,
        None => logger.format(flexi_logger::colored_default_format).start()?,
    };
    Ok(handle)
}
