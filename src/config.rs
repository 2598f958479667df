use std::path::PathBuf;

use crate::cli::Cli;

/// Settings for a single run. Built once in `main` and handed to every stage by reference.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub program_name: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub debug: bool,
}

impl RunConfig {
    pub fn new(argv0: Option<String>, input: PathBuf, output: PathBuf, debug: bool) -> Self {
        let program_name =
            argv0.filter(|name| !name.is_empty()).unwrap_or("unknown".to_string());
        Self { program_name, input, output, debug }
    }

    pub fn from_cli(argv0: Option<String>, cli: &Cli) -> Self {
        Self::new(argv0, cli.input.clone(), cli.output.clone(), cli.debug)
    }

    /// Default log filter when RUST_LOG is not set.
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }

    /// Filter directives for the subscriber. `-d` overrides RUST_LOG.
    pub fn log_filter(&self, rust_log: Option<&str>) -> String {
        match rust_log {
            Some(directives) if !self.debug && !directives.is_empty() => directives.to_string(),
            _ => self.log_level().to_string(),
        }
    }
}
