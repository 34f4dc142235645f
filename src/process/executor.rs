use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use super::{signal, ProcessError};
use crate::commands::Continuation;
use crate::flags::Flags;

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Runs `args` as an external program resolved via PATH, blocking until
    /// it terminates. The child's exit status never affects the continuation
    /// decision; a missing program is reported and the loop carries on, while
    /// any other spawn failure is unrecoverable and escalates to the caller.
    pub fn spawn_process(&self, args: &[&str]) -> Result<Continuation, ProcessError> {
        let Some((program, rest)) = args.split_first() else {
            // Empty command line, nothing to do.
            return Ok(Continuation::Continue);
        };

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // The shell ignores SIGINT and the child would inherit that through
        // exec. Undo it so Ctrl-C can interrupt the running program.
        unsafe {
            command.pre_exec(signal::restore_default_interrupts);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("command not found: {}", program);
                return Ok(Continuation::Continue);
            }
            Err(e) => return Err(ProcessError::SpawnFailed(e.to_string())),
        };

        let status = child
            .wait()
            .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;

        if !status.success() && !self.quiet_mode {
            eprintln!("Process exited with status: {}", status);
        }

        Ok(Continuation::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn executor() -> ProcessExecutor {
        ProcessExecutor::new(&Flags::new())
    }

    #[test]
    fn test_empty_args_is_noop() {
        let result = executor().spawn_process(&[]).unwrap();
        assert_eq!(result, Continuation::Continue);
    }

    #[test]
    fn test_spawn_and_wait() {
        let result = executor().spawn_process(&["echo", "hello", "world"]).unwrap();
        assert_eq!(result, Continuation::Continue);
    }

    #[test]
    fn test_failing_child_still_continues() {
        let result = executor().spawn_process(&["false"]).unwrap();
        assert_eq!(result, Continuation::Continue);
    }

    #[test]
    fn test_missing_program_is_recoverable() {
        let result = executor().spawn_process(&["not_a_real_cmd_12345"]).unwrap();
        assert_eq!(result, Continuation::Continue);
    }
}
