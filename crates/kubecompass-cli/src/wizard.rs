//! Interactive decision wizard.
//!
//! Walks the questionnaire one question at a time. Each line is either an
//! option (value or number), `back`, or `quit`.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use kubecompass_domain::{AnswerSet, Questionnaire, QuestionnaireError};
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Source of input lines for the wizard.
pub trait LineSource {
    /// Read one line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Line source backed by a rustyline editor with persistent history.
pub struct EditorSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    /// Create an editor, loading history if a path is available.
    pub fn new(history_size: usize) -> Result<Self> {
        let mut editor = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;
        editor
            .history_mut()
            .set_max_len(history_size)
            .map_err(|e| CliError::Readline(e.to_string()))?;

        let history_path = get_history_path().ok();
        if let Some(path) = &history_path {
            let _ = editor.load_history(path);
        }

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(line.as_str()).ok();
                    return Ok(Some(line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Use 'quit' to leave the wizard");
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(err) => return Err(CliError::Readline(err.to_string())),
            }
        }
    }
}

impl Drop for EditorSource {
    fn drop(&mut self) {
        if let Some(path) = &self.history_path {
            self.editor.save_history(path).ok();
        }
    }
}

/// Run the questionnaire to completion.
///
/// # Errors
/// Returns [`CliError::Aborted`] on `quit` or end of input.
pub fn run_wizard<S: LineSource>(source: &mut S, formatter: &Formatter) -> Result<AnswerSet> {
    let mut questionnaire = Questionnaire::new();

    println!("{}", formatter.info("Decision wizard - 'back' for the previous question, 'quit' to exit"));

    loop {
        let question = questionnaire.current();
        print!(
            "{}",
            formatter.question(questionnaire.index(), questionnaire.total(), question)
        );
        if let Some(previous) = questionnaire.answer_for(question) {
            println!("  (current answer: {})", previous);
        }

        let Some(line) = source.read_line("> ")? else {
            return Err(CliError::Aborted);
        };

        match line.trim() {
            "quit" | "exit" | "q" => return Err(CliError::Aborted),
            "back" | "b" => {
                if !questionnaire.can_go_back() {
                    println!("{}", formatter.warning("Already at the first question"));
                }
                questionnaire.previous();
                continue;
            }
            "" => {}
            input => {
                if let Err(e) = questionnaire.answer(input) {
                    println!("{}", formatter.error(&e.to_string()));
                    continue;
                }
            }
        }

        let step = if questionnaire.is_last() {
            questionnaire.submit().map(Some)
        } else {
            questionnaire.next().map(|_| None)
        };

        match step {
            Ok(Some(answers)) => {
                tracing::debug!(?answers, "Wizard submitted");
                return Ok(answers);
            }
            Ok(None) => {}
            Err(e @ QuestionnaireError::Unanswered(_)) => {
                println!("{}", formatter.warning(&e.to_string()));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".kubecompass");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use kubecompass_domain::{MultiCluster, RbacNeed, TeamSize, UiNeed};
    use std::collections::VecDeque;

    /// Scripted input for tests.
    struct Script(VecDeque<&'static str>);

    impl Script {
        fn new(lines: &[&'static str]) -> Self {
            Self(lines.iter().copied().collect())
        }
    }

    impl LineSource for Script {
        fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(self.0.pop_front().map(str::to_string))
        }
    }

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_straight_through() {
        let mut script = Script::new(&["large", "yes", "critical", "granular"]);
        let answers = run_wizard(&mut script, &formatter()).unwrap();
        assert_eq!(
            answers,
            AnswerSet::new(TeamSize::Large, UiNeed::Yes, MultiCluster::Critical, RbacNeed::Granular)
        );
    }

    #[test]
    fn test_retries_and_back() {
        let mut script = Script::new(&[
            "",      // unanswered, re-prompt
            "huge",  // invalid option, re-prompt
            "back",  // no-op at first question
            "1",     // small
            "no",
            "back",  // return to needsUI
            "2",     // change to nice
            "none",
            "none",
        ]);
        let answers = run_wizard(&mut script, &formatter()).unwrap();
        assert_eq!(
            answers,
            AnswerSet::new(TeamSize::Small, UiNeed::Nice, MultiCluster::None, RbacNeed::None)
        );
    }

    #[test]
    fn test_quit_aborts() {
        let mut script = Script::new(&["small", "quit"]);
        assert!(matches!(run_wizard(&mut script, &formatter()), Err(CliError::Aborted)));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let mut script = Script::new(&["small"]);
        assert!(matches!(run_wizard(&mut script, &formatter()), Err(CliError::Aborted)));
    }
}
