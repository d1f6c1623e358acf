//! External documentation tools
//!
//! The generator and the validator are opaque subprocesses. They run in the
//! project root with inherited stdio, block until done, and are never retried.

use crate::errors::DocsError;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalTool {
    name: String,
    command: Vec<String>,
}

/// How a tool invocation ended, short of failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRun {
    /// No command configured
    Skipped,
    Succeeded,
}

impl ExternalTool {
    pub fn new(name: impl Into<String>, command: Vec<String>) -> Self {
        Self { name: name.into(), command }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_configured(&self) -> bool {
        !self.command.is_empty()
    }

    /// Command line as it would be typed
    pub fn display_command(&self) -> String {
        self.command.join(" ")
    }

    /// Run the tool in `working_dir` and wait for it
    ///
    /// A non-zero exit status is an error.
    pub fn run(&self, working_dir: &Path) -> Result<ToolRun, DocsError> {
        let Some((program, args)) = self.command.split_first() else {
            return Ok(ToolRun::Skipped);
        };

        let status = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .status()
            .map_err(|source| DocsError::ToolSpawn {
                tool: self.name.clone(),
                command: self.display_command(),
                source,
            })?;

        if !status.success() {
            return Err(DocsError::ToolFailed { tool: self.name.clone(), status: status.code() });
        }

        Ok(ToolRun::Succeeded)
    }
}
