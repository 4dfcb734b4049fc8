use clap::Parser;
use gitp::constants::cli::{KEEP_ALIVE_FLAGS, TERMINAL_TOKENS};
use gitp::{Config, Console, Gitp, GitpError, Result, SystemGit, Terminal, constants, errors};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gitp")]
#[command(about = "git plus: command flows, undo shortcuts and an interactive git terminal")]
#[command(version)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Configuration file path
    #[arg(long, env = constants::config::CONFIG_ENV)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// A gitp flow (update, fork, align, undo, terminal, help) or any git command
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Terminal::default().error(&format!("{:#}", e));
            return ExitCode::FAILURE;
        }
    };

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let Some((command, args)) = cli.args.split_first() else {
        Terminal::default().error(&"No given arguments, use 'gitp help' to learn more");
        return ExitCode::FAILURE;
    };

    let mut gitp = Gitp::new(
        SystemGit::new(config.git.clone()),
        Terminal::new(config.git.clone()),
        config,
    );
    gitp.refresh_session();

    let result = if TERMINAL_TOKENS.contains(&command.as_str()) {
        terminal_keep_alive(args, gitp.config())
            .and_then(|keep_alive| gitp.run_interactive(keep_alive))
    } else {
        gitp.cursor();
        gitp.dispatch(command, args)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            gitp.show_error(&e);
            ExitCode::from(u8::try_from(errors::process_exit_code(&e)).unwrap_or(1))
        }
    }
}

/// Keep-alive setting for the interactive terminal from its flags and the config
fn terminal_keep_alive(args: &[String], config: &Config) -> Result<bool> {
    let mut keep_alive = config.keep_alive;
    for arg in args {
        if KEEP_ALIVE_FLAGS.contains(&arg.as_str()) {
            keep_alive = true;
        } else {
            return Err(GitpError::Usage(format!(
                "Unrecognized terminal argument '{}', usage: terminal [--keep-alive]",
                arg
            ))
            .into());
        }
    }
    Ok(keep_alive)
}
