//! Small driver for the `lvlog` crate.
//!
//! Three scenarios:
//! - `single`: configure the process-wide logger and emit one line per level.
//! - `multiple`: four threads hammer the process-wide logger, one level each.
//! - `custom`: an explicit `Logger` instance with its own call depth.

use std::{process::ExitCode, thread, time::Duration};

use clap::{Args, Parser, Subcommand};
use lvlog::{
    LogLevel, LoggerConfig, SinkFlag, log, log_error, log_info, log_trace, log_warning,
    logger_error, logger_info, logger_trace, logger_warning,
};

#[derive(Debug, Parser)]
#[command(name = "lvlog-demo", version, about = "Exercise the lvlog sinks and levels")]
struct Cli {
    #[command(subcommand)]
    scenario: Scenario,
}

#[derive(Debug, Subcommand)]
enum Scenario {
    /// Process-wide logger, one line per level.
    Single(Common),
    /// Four threads writing concurrently through the process-wide logger.
    Multiple {
        #[command(flatten)]
        common: Common,
        /// Lines written by each thread.
        #[arg(long, default_value_t = 100)]
        times: usize,
    },
    /// Explicit logger instance.
    Custom {
        #[command(flatten)]
        common: Common,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        call_depth: i32,
    },
}

#[derive(Debug, Args)]
struct Common {
    /// Log file stem; the file is written to `log/<name>.log`.
    #[arg(long)]
    name: Option<String>,
    /// none, console, file, console-file, or a raw bitmask.
    #[arg(long, default_value = "console-file")]
    sinks: SinkFlag,
    /// trace, info, warning or error.
    #[arg(long, default_value = "trace")]
    level: LogLevel,
    /// Refuse to start when the log file cannot be opened.
    #[arg(long)]
    strict: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.scenario {
        Scenario::Single(common) => {
            if !configure_global(&common, "single") {
                return ExitCode::FAILURE;
            }
            log_trace!("this is trace log.");
            log_info!("this is info log.");
            log_warning!("this is warning log.");
            log_error!("this is error log.");
        }
        Scenario::Multiple { common, times } => {
            if !configure_global(&common, "multiple") {
                return ExitCode::FAILURE;
            }
            let workers: Vec<_> = LogLevel::ALL
                .into_iter()
                .map(|level| {
                    thread::spawn(move || {
                        for i in 0..times {
                            log::global::logger()
                                .log(level, format_args!("this is {level} log #{i}."));
                            thread::sleep(Duration::from_micros(1));
                        }
                    })
                })
                .collect();
            for worker in workers {
                if worker.join().is_err() {
                    eprintln!("lvlog-demo: a writer thread panicked");
                    return ExitCode::FAILURE;
                }
            }
        }
        Scenario::Custom { common, call_depth } => {
            let cfg = LoggerConfig {
                call_depth,
                ..LoggerConfig::new(
                    common.name.unwrap_or_else(|| "custom".to_owned()),
                    common.sinks,
                    common.level,
                )
            };
            let logger = lvlog::Logger::new();
            if let Err(err) = cfg.apply(&logger) {
                eprintln!("lvlog-demo: {err}");
                if common.strict {
                    return ExitCode::FAILURE;
                }
            }
            logger_trace!(logger, "this is trace log.");
            logger_info!(logger, "this is info log.");
            logger_warning!(logger, "this is warning log.");
            logger_error!(logger, "this is error log.");
        }
    }

    ExitCode::SUCCESS
}

/// Returns false only when `--strict` is set and the file sink failed.
fn configure_global(common: &Common, fallback_name: &str) -> bool {
    let name = common.name.as_deref().unwrap_or(fallback_name);
    if common.strict {
        if let Err(err) = log::global::try_configure(name, common.sinks, common.level) {
            eprintln!("lvlog-demo: {err}");
            return false;
        }
    } else {
        log::global::configure(name, common.sinks, common.level);
    }
    true
}
