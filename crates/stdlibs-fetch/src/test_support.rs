use std::cell::RefCell;

use stdlibs_core::{PythonVersion, RELEASES, Release};

use crate::error::FetchError;
use crate::runner::{CommandRunner, CommandSpec};

/// The tracked release for `major.minor`.
pub fn release(major: u8, minor: u8) -> &'static Release {
    RELEASES
        .iter()
        .find(|r| r.version == PythonVersion::new(major, minor))
        .unwrap()
}

type SideEffect = Box<dyn Fn(&CommandSpec)>;

/// Records every command instead of spawning it.
#[derive(Default)]
pub struct RecordingRunner {
    seen: RefCell<Vec<CommandSpec>>,
    fail_program: Option<String>,
    side_effect: Option<SideEffect>,
}

impl RecordingRunner {
    pub fn failing_on(program: &str) -> Self {
        Self {
            fail_program: Some(program.to_string()),
            ..Self::default()
        }
    }

    /// Run `effect` for every recorded command, e.g. to fake tool output.
    pub fn with_side_effect(effect: impl Fn(&CommandSpec) + 'static) -> Self {
        Self {
            side_effect: Some(Box::new(effect)),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<CommandSpec> {
        self.seen.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), FetchError> {
        self.seen.borrow_mut().push(command.clone());
        if self.fail_program.as_deref() == Some(command.program.as_str()) {
            return Err(FetchError::CommandFailed {
                command: command.display(),
                status: "exit status: 1".to_string(),
            });
        }
        if let Some(effect) = &self.side_effect {
            effect(command);
        }
        Ok(())
    }
}
