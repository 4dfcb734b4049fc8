//! Top-level dispatcher and interactive terminal
//!
//! [`Gitp`] owns the runner, the console, the session and the configuration.
//! It routes a command keyword to the matching [`Command`] and runs it, either
//! once or repeatedly from the interactive terminal.

use crate::commands::{
    AlignCommand, Command, CommandContext, ForkCommand, HelpCommand, PassthroughCommand,
    UndoCommand, UpdateCommand, validators,
};
use crate::config::Config;
use crate::constants::cli::{HELP_TOKENS, WRAPPER_NAMES};
use crate::errors::GitpError;
use crate::git::{GitRunner, Invocation};
use crate::session::Session;
use crate::ui::Console;
use crate::utils::split_command_line;
use anyhow::Result;

pub struct Gitp<G: GitRunner, C: Console> {
    git: G,
    console: C,
    session: Session,
    config: Config,
}

impl<G: GitRunner, C: Console> Gitp<G, C> {
    /// Create a dispatcher with an empty session, see [`Gitp::refresh_session`]
    pub fn new(git: G, console: C, config: Config) -> Self {
        Self {
            git,
            console,
            session: Session::default(),
            config,
        }
    }

    /// Replace the session, mostly useful to start from known labels
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read branch and repository labels, warning instead of failing
    pub fn refresh_session(&mut self) -> bool {
        self.context().refresh_session()
    }

    /// Print the prompt line
    pub fn cursor(&mut self) {
        self.console.cursor(&self.session);
    }

    /// Print an error block, including any context chain
    pub fn show_error(&mut self, error: &anyhow::Error) {
        self.console.error(&format!("{:#}", error));
    }

    /// Route `command` to its implementation
    pub fn route(&self, command: &str, args: &[String]) -> Result<Box<dyn Command>> {
        if WRAPPER_NAMES.contains(&command) {
            return match args.split_first() {
                Some((inner, rest)) => self.route(inner, rest),
                None => Err(GitpError::Usage(format!(
                    "Missing command after '{}', use 'gitp help' to learn more",
                    command
                ))
                .into()),
            };
        }

        if HELP_TOKENS.contains(&command) {
            return Ok(Box::new(HelpCommand {
                args: args.to_vec(),
            }));
        }

        let invocation = || Invocation::new(command, args.iter().cloned());

        let routed: Box<dyn Command> = match command {
            "undo" => Box::new(UndoCommand::parse(args)?),
            "update" => Box::new(UpdateCommand),
            "fork" => Box::new(ForkCommand::new(validators::validate_fork_args(args)?)),
            "align" => {
                let reference = validators::validate_align_args(args, &self.session)?;
                Box::new(AlignCommand::new(self.session.branch(), reference))
            }
            "init" | "clone" => Box::new(PassthroughCommand::refreshing(invocation())),
            "checkout" | "switch" => {
                validators::validate_switch_args(command, args)?;
                Box::new(PassthroughCommand::refreshing(invocation()))
            }
            _ => Box::new(PassthroughCommand::new(invocation())),
        };
        Ok(routed)
    }

    /// Run one command line: a keyword and its arguments
    pub fn dispatch(&mut self, command: &str, args: &[String]) -> Result<()> {
        let routed = self.route(command, args)?;
        routed.execute(&mut self.context())
    }

    /// Read and run command lines until the escape line or end of input
    ///
    /// Without `keep_alive` the first error ends the loop and is returned,
    /// with it every error is shown and the loop goes on.
    pub fn run_interactive(&mut self, keep_alive: bool) -> Result<()> {
        loop {
            self.cursor();

            let Some(line) = self.console.read_line()? else {
                return Ok(());
            };
            let line = line.trim();
            if line == self.config.escape {
                return Ok(());
            }

            let result = split_command_line(line)
                .map_err(anyhow::Error::from)
                .and_then(|tokens| match tokens.split_first() {
                    Some((command, args)) => self.dispatch(command, args),
                    None => Ok(()),
                });

            match result {
                Err(e) if keep_alive => self.show_error(&e),
                Err(e) => return Err(e),
                Ok(()) => {}
            }
        }
    }

    fn context(&mut self) -> CommandContext<'_> {
        CommandContext {
            git: &self.git,
            console: &mut self.console,
            session: &mut self.session,
            config: &self.config,
        }
    }
}
