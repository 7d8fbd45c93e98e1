use serde::Serialize;

use crate::models::domain::QuizSession;

/// How a single option should be rendered for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionMark {
    /// Nothing special; also used for unselected wrong options after a check.
    Neutral,
    /// Highlighted as the user's current pick, before checking.
    Selected,
    /// Revealed as the correct answer after checking.
    Correct,
    /// The user's pick, revealed as wrong after checking.
    IncorrectSelected,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub text: String,
    pub mark: OptionMark,
}

/// Sidebar badge for one question number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarBadge {
    Unchecked,
    Correct,
    Incorrect,
}

/// A full render of one session state. Purely derived; holds no state of
/// its own beyond what the machine reports.
#[derive(Clone, Debug, Serialize)]
pub struct QuizSnapshot {
    pub total_questions: usize,
    pub current_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub options: Vec<OptionView>,
    pub checked: bool,
    pub can_check: bool,
    pub can_advance: bool,
    pub advance_label: &'static str,
    pub sidebar: Vec<SidebarBadge>,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<usize>,
}

impl QuizSnapshot {
    pub fn from_session(session: &QuizSession) -> Self {
        if session.completed() {
            return Self {
                total_questions: session.questions().len(),
                current_index: session.current_index(),
                question: None,
                options: Vec::new(),
                checked: false,
                can_check: false,
                can_advance: false,
                advance_label: "Reattempt Quiz",
                sidebar: Vec::new(),
                completed: true,
                score: session.score(),
            };
        }

        let index = session.current_index();
        let current = &session.questions()[index];
        let selected = session.answer(index);
        let checked = session.is_checked(index);

        let options = current
            .options
            .iter()
            .map(|option| {
                let is_selected = selected == Some(option.as_str());
                let mark = if checked {
                    if *option == current.correct {
                        OptionMark::Correct
                    } else if is_selected {
                        OptionMark::IncorrectSelected
                    } else {
                        OptionMark::Neutral
                    }
                } else if is_selected {
                    OptionMark::Selected
                } else {
                    OptionMark::Neutral
                };
                OptionView {
                    text: option.clone(),
                    mark,
                }
            })
            .collect();

        let sidebar = session
            .questions()
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if !session.is_checked(i) {
                    SidebarBadge::Unchecked
                } else if session.answer(i) == Some(q.correct.as_str()) {
                    SidebarBadge::Correct
                } else {
                    SidebarBadge::Incorrect
                }
            })
            .collect();

        let is_last = index + 1 == session.questions().len();

        Self {
            total_questions: session.questions().len(),
            current_index: index,
            question: Some(current.question.clone()),
            options,
            checked,
            can_check: selected.is_some() && !checked,
            can_advance: checked,
            advance_label: if is_last { "Submit Quiz" } else { "Next" },
            sidebar,
            completed: false,
            score: None,
        }
    }
}
