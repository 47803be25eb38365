// src/exec/command.rs

use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{KuError, Result};
use crate::exec::backend::{CommandOutput, CommandSpec, StdoutTarget};

/// Run a single external process to completion.
///
/// Stderr is always inherited so the child's own diagnostics reach the user
/// unchanged. A non-zero exit becomes [`KuError::CommandFailed`]; there is
/// no timeout.
pub async fn run_command(spec: CommandSpec) -> Result<CommandOutput> {
    info!(program = ?spec.program, args = ?spec.args, "starting process");

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    match &spec.stdout {
        StdoutTarget::Inherit => {
            cmd.stdout(Stdio::inherit());
        }
        StdoutTarget::Capture => {
            cmd.stdout(Stdio::piped());
        }
        StdoutTarget::File(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating output file {:?} for {:?}", path, spec.program))?;
            cmd.stdout(Stdio::from(file));
        }
    }

    let child = cmd.spawn().map_err(|source| KuError::CommandSpawn {
        program: spec.program_name(),
        source,
    })?;

    let output = child
        .wait_with_output()
        .await
        .with_context(|| format!("waiting for process {:?}", spec.program))?;

    let code = output.status.code();
    info!(
        program = ?spec.program,
        exit_code = code.unwrap_or(-1),
        success = output.status.success(),
        "process exited"
    );

    if !output.status.success() {
        return Err(KuError::CommandFailed {
            program: spec.program_name(),
            code,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(program = ?spec.program, bytes = stdout.len(), "captured stdout");

    Ok(CommandOutput { stdout })
}
