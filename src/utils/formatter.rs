use std::{io::ErrorKind, path::Path, process::Command};

use tracing::{info, warn};

use crate::GeneratorError;

/// External source formatter run over the written artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceFormatter {
    command: Vec<String>,
}

impl SourceFormatter {
    pub fn new(command: &[String]) -> Self {
        SourceFormatter {
            command: command.to_vec(),
        }
    }

    pub fn disabled() -> Self {
        SourceFormatter { command: vec![] }
    }

    pub fn is_enabled(&self) -> bool {
        !self.command.is_empty()
    }

    /// Runs the formatter to completion. A formatter that is not installed is skipped.
    pub fn format(&self, path: &Path) -> Result<(), GeneratorError> {
        let Some((program, args)) = self.command.split_first() else {
            return Ok(());
        };
        let command_line = self.command.join(" ");

        let status = match Command::new(program).args(args).arg(path).status() {
            Ok(status) => status,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!("Formatter {} not found, {} left unformatted", program, path.display());
                return Ok(());
            }
            Err(err) => {
                return Err(GeneratorError::FormatterError(command_line, err.to_string()));
            }
        };

        if !status.success() {
            return Err(GeneratorError::FormatterError(
                command_line,
                format!("exited with {}", status),
            ));
        }
        info!("Formatted {} with {}", path.display(), command_line);
        Ok(())
    }
}
