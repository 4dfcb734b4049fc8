//! Central constants for the gitp application

/// Default values for git invocations
pub mod git {
    /// Default external binary
    pub const DEFAULT_BINARY: &str = "git";

    /// Default remote used by flows and branch removal
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Suffix appended to the branch label when HEAD is detached
    pub const DETACHED_SUFFIX: &str = " [detached]";

    /// `ls-remote --exit-code` codes meaning "no matching ref"
    pub const LS_REMOTE_NOT_FOUND: &[i32] = &[1, 2];

    /// `show-ref --verify --quiet` code meaning "no such ref"
    pub const SHOW_REF_NOT_FOUND: &[i32] = &[1];
}

/// Keywords and flags recognised on the command line
pub mod cli {
    /// First tokens that start the interactive terminal
    pub const TERMINAL_TOKENS: &[&str] = &["terminal", "-terminal", "--terminal"];

    /// Flags that keep the interactive terminal running after a failure
    pub const KEEP_ALIVE_FLAGS: &[&str] = &["--keep-alive", "-keep-alive", "keep-alive"];

    /// Flags that skip the remote deletion prompt of `undo branch`
    pub const CONFIRM_FLAGS: &[&str] = &["--confirm", "-confirm", "confirm"];

    /// Keywords that re-dispatch on their first argument
    pub const WRAPPER_NAMES: &[&str] = &["git", "gitp"];

    /// Keywords that print the composed help
    pub const HELP_TOKENS: &[&str] = &["help", "-h", "--help"];

    /// Undo keywords listed in usage errors
    pub const UNDO_USAGE: &str = "undo [commit|branch|fork|merge|stash|upstream|add|stage]";
}

/// Default values for configuration
pub mod config {
    /// Configuration file picked up from the working directory
    pub const DEFAULT_CONFIG_FILE: &str = "gitp.yaml";

    /// Environment variable naming an explicit configuration file
    pub const CONFIG_ENV: &str = "GITP_CONFIG";

    /// Interactive terminal escape token (a blank line)
    pub const DEFAULT_ESCAPE: &str = "";
}
