use std::io::{self, BufRead, Write};

mod executor;

use crate::{
    commands::{CommandRegistry, Continuation},
    error::ShellError,
    flags::Flags,
    process::{signal, ProcessExecutor},
    prompt::Prompt,
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) prompt: Prompt,
    pub(crate) registry: CommandRegistry,
    pub(crate) executor: ProcessExecutor,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let executor = ProcessExecutor::new(&flags);

        Ok(Shell {
            prompt: Prompt::new(),
            registry: CommandRegistry::new(),
            executor,
            flags,
        })
    }

    /// Runs the read-parse-execute loop until `exit` or a fatal error.
    ///
    /// End-of-input on stdin is not a normal exit path: it is reported as an
    /// operational error and the process terminates with a non-zero status.
    pub fn run(&mut self) -> Result<(), ShellError> {
        signal::ignore_interrupts()?;

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();

        loop {
            print!("{}", self.prompt.render());
            io::stdout().flush()?;

            line.clear();
            match input.read_line(&mut line) {
                Ok(0) => return Err(ShellError::InputClosed),
                Ok(_) => {}
                Err(e) => return Err(ShellError::Io(e)),
            }

            match self.execute_line(&line)? {
                Continuation::Continue => {}
                Continuation::Exit => break,
            }
        }
        Ok(())
    }
}
