// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launching the planned command.

use std::io;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::{Command, ExitStatus};

use cchell_shell::ExecutionPlan;

/// Run `plan` to completion and return its exit code.
///
/// The child inherits stdio and the environment, plus the plan's
/// assignments. `argv[0]` is passed as the program name.
pub fn launch(plan: &ExecutionPlan) -> io::Result<i32> {
    let mut cmd = Command::new(&plan.path);
    if let Some((name, args)) = plan.argv.split_first() {
        cmd.arg0(name).args(args);
    }
    cmd.envs(plan.envp.iter().map(|(k, v)| (k, v)));

    tracing::info!(path = %plan.path.display(), argv = ?plan.argv, "launching");
    let status = cmd.status()?;
    let code = exit_code(status);
    tracing::debug!(code, "command finished");
    Ok(code)
}

/// Exit code of a finished process: its own code, or 128 + signal.
pub fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}
