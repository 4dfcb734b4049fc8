//! Composed help text

use colored::*;

/// Help describing flows, undo shortcuts, align and the interactive terminal
pub fn usage_text() -> String {
    let mut text = String::new();

    text.push_str("gitp aka git+ is a cli that facilitates you when using git commands\n\n");

    text.push_str(&format!(
        "{} are a list of commands that get executed one after the other, for common tasks:\n",
        " Flows ".white().on_blue()
    ));
    text.push_str(&format!(
        " • {} (status > stash* > fetch > pull > stash pop*): update your branch with possible incoming remote changes\n",
        "update".bright_magenta()
    ));
    text.push_str(&format!(
        " • {} (status > stash* > fetch > pull > checkout -b <branch> > push --set-upstream origin <branch> > stash pop*): \
         update the current branch, create a new one from it with the given name and set its remote upstream\n",
        "fork <branch-name>".bright_magenta()
    ));
    text.push_str(&format!(
        " • {} (status > stash* > fetch > pull > checkout <ref> > pull > checkout <current> > merge <ref> > stash pop*): \
         update current and reference branches and merge reference into current\n",
        "align <reference-branch>".bright_magenta()
    ));
    text.push_str(&format!(
        " • {}: has different effects depending on input\n",
        "undo [commit|branch|fork|merge|stash|upstream|add|stage] <args...>".bright_magenta()
    ));
    for line in [
        "commit (reset HEAD~1 <args...>): reset last commit preserving changes locally",
        "merge (merge --abort <args...>): abort the current merge",
        "stash (stash pop <args...>): reapply last stashed item and remove it from the stack",
        "upstream (branch --unset-upstream <args...>): disable remote tracking from a branch",
        "add, stage (restore --staged <args...>): remove matching files from stage",
        "branch [<branch-name>] [--confirm]: remove the given branch, or the current one; \
         a branch pushed to the remote is deleted there too after a confirm, pass '--confirm' to skip it",
        "fork <branch-name> (undo branch <branch-name> --confirm): pre-confirmed alias to revert a fork",
    ] {
        text.push_str(&format!("\t {}\n", line));
    }

    text.push_str(&format!(
        "{} An interactive git command line that keeps asking for new gitp flows or git commands.\n",
        " Terminal ".white().on_blue()
    ));
    text.push_str(
        "To use it launch this program with 'terminal', '--terminal' or '-terminal' as first argument.\n",
    );
    text.push_str(
        "By default the terminal stops when a command fails, pass --keep-alive to keep it running.\n",
    );
    text.push_str("To escape just insert a blank line\n\n");

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_mentions_every_flow() {
        let text = usage_text();
        for keyword in [
            "update",
            "fork <branch-name>",
            "align <reference-branch>",
            "undo [",
            "--keep-alive",
        ] {
            assert!(text.contains(keyword), "missing {}", keyword);
        }
    }
}
