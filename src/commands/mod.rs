use std::collections::BTreeMap;

mod cd;
mod exit;
mod help;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;

#[derive(Debug)]
pub enum CommandError {
    ExecutionError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl std::error::Error for CommandError {}

/// Whether the read-execute cycle should repeat after a command.
/// `Exit` is only ever produced by the `exit` built-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Exit,
}

pub trait Command {
    fn execute(&self, args: &[&str]) -> Result<Continuation, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[&str]) -> Result<Continuation, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::Help(cmd) => cmd.execute(args),
        }
    }
}

/// The fixed set of commands handled inside the shell process itself.
#[derive(Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("help".to_string(), CommandType::Help(HelpCommand::new()));
        CommandRegistry { commands }
    }

    /// Runs `name` as a built-in, or returns `None` so the caller can fall
    /// through to spawning an external program.
    pub fn dispatch(&self, name: &str, args: &[&str]) -> Option<Result<Continuation, CommandError>> {
        self.commands.get(name).map(|cmd| cmd.execute(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_declines_unknown_command() {
        let registry = CommandRegistry::new();
        assert!(registry.dispatch("ls", &[]).is_none());
        assert!(registry.dispatch("not_a_real_cmd_12345", &[]).is_none());
    }

    #[test]
    fn test_dispatch_exit_stops_loop() {
        let registry = CommandRegistry::new();
        let result = registry.dispatch("exit", &[]).unwrap().unwrap();
        assert_eq!(result, Continuation::Exit);
    }

    #[test]
    fn test_dispatch_help_continues_loop() {
        let registry = CommandRegistry::new();
        let result = registry.dispatch("help", &[]).unwrap().unwrap();
        assert_eq!(result, Continuation::Continue);
    }
}
