use super::{Command, CommandError, Continuation};

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _args: &[&str]) -> Result<Continuation, CommandError> {
        println!("minish - a minimal interactive shell");
        println!("Built-in commands:");
        println!("  cd [dir]   Change the working directory (home when omitted)");
        println!("  help       Show this message");
        println!("  exit       Leave the shell");
        println!("Anything else runs as an external program found on PATH.");
        Ok(Continuation::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_continues_loop() {
        let cmd = HelpCommand::new();
        assert_eq!(cmd.execute(&[]).unwrap(), Continuation::Continue);
    }
}
