use super::{Command, CommandError, Continuation};

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _args: &[&str]) -> Result<Continuation, CommandError> {
        // Termination flows through the continuation signal so the loop can
        // unwind and the process exits 0 from main.
        println!("Good Bye...");
        Ok(Continuation::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_signals_stop() {
        let cmd = ExitCommand::new();
        assert_eq!(cmd.execute(&[]).unwrap(), Continuation::Exit);
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let cmd = ExitCommand::new();
        assert_eq!(cmd.execute(&["now", "please"]).unwrap(), Continuation::Exit);
    }
}
