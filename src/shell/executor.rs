use crate::commands::Continuation;
use crate::error::ShellError;
use crate::parser;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<Continuation, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<Continuation, ShellError> {
        // The argument vector borrows from `line`; it never outlives one
        // loop iteration.
        let args = parser::tokenize(line);
        let Some(&name) = args.first() else {
            // Blank line, benign no-op.
            return Ok(Continuation::Continue);
        };

        if let Some(result) = self.registry.dispatch(name, &args[1..]) {
            return match result {
                Ok(continuation) => Ok(continuation),
                Err(e) => {
                    // Built-in failures resolve here and never outlive the
                    // current iteration.
                    if !self.flags.is_set("quiet") {
                        eprintln!("{}", e);
                    }
                    Ok(Continuation::Continue)
                }
            };
        }

        Ok(self.executor.spawn_process(&args)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;
    use crate::shell::Shell;

    fn shell() -> Shell {
        Shell::new(Flags::new()).unwrap()
    }

    #[test]
    fn test_blank_lines_continue() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("").unwrap(), Continuation::Continue);
        assert_eq!(shell.execute_line("\n").unwrap(), Continuation::Continue);
        assert_eq!(
            shell.execute_line("   \t  \n").unwrap(),
            Continuation::Continue
        );
    }

    #[test]
    fn test_exit_stops_loop() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("exit\n").unwrap(), Continuation::Exit);
    }

    #[test]
    fn test_help_continues_loop() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("help\n").unwrap(), Continuation::Continue);
    }

    #[test]
    fn test_external_program_runs_and_continues() {
        let mut shell = shell();
        assert_eq!(
            shell.execute_line("echo hello world\n").unwrap(),
            Continuation::Continue
        );
    }

    #[test]
    fn test_child_failure_does_not_stop_loop() {
        let mut shell = shell();
        assert_eq!(shell.execute_line("false\n").unwrap(), Continuation::Continue);
    }

    #[test]
    fn test_unknown_command_is_recoverable() {
        let mut shell = shell();
        assert_eq!(
            shell.execute_line("not_a_real_cmd_12345\n").unwrap(),
            Continuation::Continue
        );
    }
}
