use crate::process::ProcessError;

use libc::{signal, SIGINT, SIG_DFL, SIG_ERR, SIG_IGN};

/// Makes the shell itself immune to the interactive interrupt (Ctrl-C) so it
/// survives while idle at the prompt or waiting on a child. Set once at
/// startup; the disposition is inherited through exec, so spawned children
/// must reset it themselves.
pub fn ignore_interrupts() -> Result<(), ProcessError> {
    let previous = unsafe { signal(SIGINT, SIG_IGN) };
    if previous == SIG_ERR {
        return Err(ProcessError::SignalError(
            "failed to ignore SIGINT".to_string(),
        ));
    }
    Ok(())
}

/// Restores default interrupt handling. Runs in the child between fork and
/// exec so Ctrl-C can still kill a running program. Async-signal-safe.
pub fn restore_default_interrupts() -> std::io::Result<()> {
    let previous = unsafe { signal(SIGINT, SIG_DFL) };
    if previous == SIG_ERR {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}
