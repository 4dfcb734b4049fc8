//! Common test support utilities and fixtures
//!
//! `FakeGit` stands in for the git binary and `RecordingConsole` for the
//! terminal, so command behaviour can be checked without a repository.

#![allow(dead_code)]

use gitp::ui::parse_confirmation;
use gitp::{
    CommandContext, Config, Console, GitRunner, Gitp, GitpError, Invocation, InvocationResult,
    Session,
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fmt::Display;
use std::path::Path;
use std::process::Command;

/// Runner that records every invocation and answers from a script
///
/// Command lines without a scripted answer succeed with empty output.
#[derive(Debug, Default)]
pub struct FakeGit {
    responses: HashMap<String, InvocationResult>,
    calls: RefCell<Vec<String>>,
}

impl FakeGit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `line` (command and arguments joined by spaces) with `result`
    pub fn respond(mut self, line: &str, result: InvocationResult) -> Self {
        self.responses.insert(line.to_string(), result);
        self
    }

    pub fn succeed(self, line: &str, output: &str) -> Self {
        self.respond(line, InvocationResult::success(output))
    }

    pub fn fail(self, line: &str, code: i32, output: &str) -> Self {
        self.respond(line, InvocationResult::failure(code, output))
    }

    /// Every command line run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn was_called(&self, line: &str) -> bool {
        self.calls.borrow().iter().any(|call| call == line)
    }

    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

impl GitRunner for FakeGit {
    fn run(&self, invocation: &Invocation) -> anyhow::Result<InvocationResult> {
        let line = invocation.to_string();
        self.calls.borrow_mut().push(line.clone());
        Ok(self
            .responses
            .get(&line)
            .cloned()
            .unwrap_or_else(|| InvocationResult::success("")))
    }
}

/// Status line reporting one modified tracked file
pub const DIRTY_STATUS: &str = " M src/lib.rs";

/// The status query run before stash-protected work
pub const STATUS: &str = "status --porcelain=v1 --untracked-files=no";

/// Something shown on the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Cursor(String),
    FlowStart(String),
    FlowEnd(String),
    Command(String),
    Output(String),
    Warning(String),
    Error(String),
    Help(String),
    Confirm(String),
}

/// Console that records events and replays scripted input
#[derive(Debug, Default)]
pub struct RecordingConsole {
    pub events: Vec<Event>,
    answers: VecDeque<String>,
    lines: VecDeque<String>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw answers for confirmation prompts
    pub fn with_answers(mut self, answers: &[&str]) -> Self {
        self.answers.extend(answers.iter().map(|a| a.to_string()));
        self
    }

    /// Queue interactive input lines
    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    pub fn confirmations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Confirm(_)))
            .count()
    }

    pub fn flow_ends(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::FlowEnd(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Warning(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Console for RecordingConsole {
    fn cursor(&mut self, session: &Session) {
        self.events.push(Event::Cursor(format!(
            "{} {}",
            session.directory(),
            session.branch()
        )));
    }

    fn flow_start(&mut self, name: &str) {
        self.events.push(Event::FlowStart(name.to_string()));
    }

    fn flow_end(&mut self, name: &str) {
        self.events.push(Event::FlowEnd(name.to_string()));
    }

    fn command(&mut self, invocation: &Invocation) {
        self.events.push(Event::Command(invocation.to_string()));
    }

    fn output(&mut self, text: &str) {
        self.events.push(Event::Output(text.to_string()));
    }

    fn warning(&mut self, message: &dyn Display) {
        self.events.push(Event::Warning(message.to_string()));
    }

    fn error(&mut self, error: &dyn Display) {
        self.events.push(Event::Error(error.to_string()));
    }

    fn help(&mut self, git_help: &str) {
        self.events.push(Event::Help(git_help.to_string()));
    }

    fn confirm(&mut self, branch: &str, remote: &str) -> anyhow::Result<bool> {
        self.events
            .push(Event::Confirm(format!("{}/{}", remote, branch)));
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| GitpError::Prompt("No confirmation given".to_string()))?;
        Ok(parse_confirmation(&answer)?)
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Dispatcher over fakes, starting on `branch` in repository `repo`
pub fn gitp_on(
    branch: &str,
    git: FakeGit,
    console: RecordingConsole,
) -> Gitp<FakeGit, RecordingConsole> {
    Gitp::new(git, console, Config::default()).with_session(Session::new(branch, "repo"))
}

/// Owned pieces of a [`CommandContext`] for driving commands directly
pub struct Harness {
    pub git: FakeGit,
    pub console: RecordingConsole,
    pub session: Session,
    pub config: Config,
}

impl Harness {
    pub fn new(branch: &str, git: FakeGit) -> Self {
        Self::with_console(branch, git, RecordingConsole::new())
    }

    pub fn with_console(branch: &str, git: FakeGit, console: RecordingConsole) -> Self {
        Self {
            git,
            console,
            session: Session::new(branch, "repo"),
            config: Config::default(),
        }
    }

    pub fn context(&mut self) -> CommandContext<'_> {
        CommandContext {
            git: &self.git,
            console: &mut self.console,
            session: &mut self.session,
            config: &self.config,
        }
    }
}

/// Build a `Vec<String>` from string literals
pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Run git in `path`, panicking on failure
pub fn git_in(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a git repository with basic configuration and one commit
pub fn init_git_repo(path: &Path) {
    std::fs::create_dir_all(path).expect("Failed to create repo dir");
    git_in(path, &["init"]);
    git_in(path, &["config", "user.name", "Test User"]);
    git_in(path, &["config", "user.email", "test@example.com"]);
    std::fs::write(path.join("README.md"), "# Test Repository").expect("Failed to write file");
    git_in(path, &["add", "."]);
    git_in(path, &["commit", "-m", "Initial commit"]);
}
