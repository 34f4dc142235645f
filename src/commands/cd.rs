use super::{Command, CommandError, Continuation};
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[&str]) -> Result<Continuation, CommandError> {
        let target = args.first().copied().unwrap_or("~");
        let expanded_path = self
            .path_expander
            .expand(target)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        env::set_current_dir(&expanded_path).map_err(|e| {
            CommandError::ExecutionError(format!("Failed to change directory: {}", e))
        })?;

        Ok(Continuation::Continue)
    }
}
