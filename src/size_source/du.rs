use std::{path::Path, process::Command};

use color_eyre::{Result, eyre::WrapErr};
use tracing::debug;

use super::source::{SizeSource, SourceOutput};

pub const DEFAULT_PROGRAM: &str = "du";

/// Sizes from an external `du -d 1 <target>`.
#[derive(Debug, Clone)]
pub struct DuCommand {
    program: String,
}

impl Default for DuCommand {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl DuCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SizeSource for DuCommand {
    fn list(&self, target: &Path) -> Result<SourceOutput> {
        debug!(program = %self.program, target = %target.display(), "running size source");

        // output() waits for exit and drains both pipes
        let output = Command::new(&self.program)
            .args(["-d", "1"])
            .arg(target)
            .output()
            .with_context(|| {
                format!(
                    "Failed to run `{} -d 1 {}`",
                    self.program,
                    target.display()
                )
            })?;

        Ok(SourceOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
