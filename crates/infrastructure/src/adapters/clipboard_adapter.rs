//! Clipboard adapter - pipes text into a platform clipboard command

use std::process::Stdio;

use application::error::ApplicationError;
use application::ports::ClipboardPort;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, instrument};

/// Copies text by writing it to the stdin of an external program
/// (`pbcopy`, `clip`, `xclip -selection clipboard`, `wl-copy`, ...)
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Build from an argv list
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `argv` is empty.
    pub fn from_argv(argv: &[String]) -> Result<Self, ApplicationError> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            ApplicationError::Configuration("Clipboard command must not be empty".into())
        })?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl ClipboardPort for CommandClipboard {
    #[instrument(skip(self, text), fields(program = %self.program, len = text.len()))]
    async fn write_text(&self, text: &str) -> Result<(), ApplicationError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        debug!("Running clipboard command: {:?}", cmd);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApplicationError::Clipboard(format!(
                    "Clipboard command '{}' not found",
                    self.program
                ))
            } else {
                ApplicationError::Clipboard(format!("Failed to run {}: {e}", self.program))
            }
        })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await.map_err(|e| {
                ApplicationError::Clipboard(format!("Failed to write to {}: {e}", self.program))
            })?;
            // stdin is dropped here, closing it
        }

        let output = child.wait_with_output().await.map_err(|e| {
            ApplicationError::Clipboard(format!("Failed to wait for {}: {e}", self.program))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Clipboard command failed: {}", stderr);
            return Err(ApplicationError::Clipboard(format!(
                "{} exited with status {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
