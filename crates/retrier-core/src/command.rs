//! Run an external program once and turn a non-zero exit into an error whose
//! text the retry matcher can inspect.

use std::io;
use std::process::Command;

/// Why a single program run failed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program could not be started at all.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    /// The program ran and exited unsuccessfully. `message` is its trimmed
    /// stderr, or the exit status when stderr was empty.
    #[error("{message}")]
    Exit { code: Option<i32>, message: String },
}

/// Runs `program` with `args`, returning captured stdout on a zero exit.
pub fn run_once(program: &str, args: &[String]) -> Result<Vec<u8>, CommandError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if output.status.success() {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let message = if stderr.is_empty() {
        match output.status.code() {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    } else {
        stderr.to_string()
    };
    tracing::debug!(program, code = ?output.status.code(), "command failed: {}", message);
    Err(CommandError::Exit {
        code: output.status.code(),
        message,
    })
}
