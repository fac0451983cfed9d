//! Blocking external process execution.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::error::FetchError;

/// A fully resolved command line plus its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<OsString>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    /// Build a spec from a configured `[program, fixed args...]` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::EmptyCommand`] if `prefix` is empty.
    pub fn from_prefix(
        what: &'static str,
        prefix: &[String],
        cwd: impl Into<PathBuf>,
    ) -> Result<Self, FetchError> {
        let (program, fixed) = prefix.split_first().ok_or(FetchError::EmptyCommand(what))?;
        Ok(Self {
            program: program.clone(),
            args: fixed.iter().map(OsString::from).collect(),
            cwd: cwd.into(),
        })
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Shell-ish rendering for logs and errors.
    #[must_use]
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }
}

/// Runs external programs to completion.
pub trait CommandRunner {
    /// Run `command`, failing on spawn errors and non-zero exits.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Spawn`] or [`FetchError::CommandFailed`].
    fn run(&self, command: &CommandSpec) -> Result<(), FetchError>;
}

/// Spawns real child processes with inherited stdio and no timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), FetchError> {
        tracing::info!(command = %command.display(), cwd = %command.cwd.display(), "running");
        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status()
            .map_err(|source| FetchError::Spawn {
                command: command.display(),
                source,
            })?;
        if !status.success() {
            return Err(FetchError::CommandFailed {
                command: command.display(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
