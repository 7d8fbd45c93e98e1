use std::collections::HashMap;

use crate::models::domain::QuizQuestion;

/// One in-memory quiz attempt: a fixed question list plus the user's
/// per-question selections and check status.
///
/// Every operation with an unmet precondition is a silent no-op rather than
/// an error, so a double-click or a stale event cannot corrupt the session.
/// The question list never changes for the lifetime of an attempt; restart
/// replaces the session contents wholesale.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: HashMap<usize, String>,
    checked: HashMap<usize, bool>,
    current_index: usize,
    completed: bool,
    score: Option<usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            checked: HashMap::new(),
            current_index: 0,
            completed: false,
            score: None,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Final score; `None` until the session completes.
    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(&index).copied().unwrap_or(false)
    }

    /// Records the selection for `index`. Ignored once the answer at that
    /// index has been checked: a checked answer is immutable.
    pub fn select_option(&mut self, index: usize, option: &str) {
        debug_assert!(index < self.questions.len(), "question index out of range");
        if index >= self.questions.len() || self.completed {
            return;
        }
        if self.is_checked(index) {
            return;
        }
        self.answers.insert(index, option.to_string());
    }

    /// Commits the answer at `index`. Requires a selection to exist and the
    /// index to be unchecked; otherwise does nothing.
    pub fn check_answer(&mut self, index: usize) {
        if index >= self.questions.len() || self.completed {
            return;
        }
        if !self.answers.contains_key(&index) || self.is_checked(index) {
            return;
        }
        self.checked.insert(index, true);
    }

    /// Moves to the next question, or completes the session when called on
    /// the last one. Completion derives from "no next question remains":
    /// skipped questions simply score as incorrect.
    pub fn advance(&mut self) {
        if self.completed {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.score = Some(self.tally_score());
            self.completed = true;
        }
    }

    pub fn retreat(&mut self) {
        if self.completed || self.current_index == 0 {
            return;
        }
        self.current_index -= 1;
    }

    /// Free navigation for the question-number sidebar. Never touches
    /// answers or check status.
    pub fn jump_to(&mut self, index: usize) {
        if self.completed || index >= self.questions.len() {
            return;
        }
        self.current_index = index;
    }

    /// Replaces the session wholesale with a freshly fetched question list.
    pub fn restart(&mut self, new_questions: Vec<QuizQuestion>) {
        self.questions = new_questions;
        self.answers.clear();
        self.checked.clear();
        self.current_index = 0;
        self.completed = false;
        self.score = None;
    }

    fn tally_score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers.get(i).is_some_and(|a| *a == q.correct))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::question;

    fn session(count: usize) -> QuizSession {
        QuizSession::new((0..count).map(question).collect())
    }

    #[test]
    fn fresh_session_starts_at_first_question() {
        let session = session(3);
        assert_eq!(session.current_index(), 0);
        assert!(!session.completed());
        assert_eq!(session.score(), None);
        assert_eq!(session.answer(0), None);
    }

    #[test]
    fn select_then_check_locks_the_answer() {
        let mut session = session(3);
        session.select_option(0, "wrong a 0");
        session.select_option(0, "right 0");
        assert_eq!(session.answer(0), Some("right 0"));

        session.check_answer(0);
        assert!(session.is_checked(0));

        // Checked answers are immutable.
        session.select_option(0, "wrong b 0");
        assert_eq!(session.answer(0), Some("right 0"));
    }

    #[test]
    fn check_without_selection_is_a_no_op() {
        let mut session = session(2);
        session.check_answer(0);
        assert!(!session.is_checked(0));
    }

    #[test]
    fn double_check_is_a_no_op() {
        let mut session = session(2);
        session.select_option(0, "right 0");
        session.check_answer(0);
        session.check_answer(0);
        assert!(session.is_checked(0));
    }

    #[test]
    fn advance_walks_forward_and_completes_on_last() {
        let mut session = session(2);
        session.advance();
        assert_eq!(session.current_index(), 1);
        assert!(!session.completed());

        session.advance();
        assert!(session.completed());
        assert_eq!(session.score(), Some(0));
    }

    #[test]
    fn retreat_stops_at_zero() {
        let mut session = session(3);
        session.retreat();
        assert_eq!(session.current_index(), 0);

        session.advance();
        session.retreat();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn jump_to_changes_only_the_current_index() {
        let mut session = session(4);
        session.select_option(0, "right 0");
        session.check_answer(0);

        session.jump_to(3);
        assert_eq!(session.current_index(), 3);
        assert_eq!(session.answer(0), Some("right 0"));
        assert!(session.is_checked(0));

        // Out-of-range jump is ignored, never a panic.
        session.jump_to(99);
        assert_eq!(session.current_index(), 3);
    }

    #[test]
    fn skipped_questions_count_as_incorrect() {
        // Q1 answered correctly and checked, Q2 skipped entirely,
        // Q3 answered incorrectly and checked.
        let mut session = session(3);
        session.select_option(0, "right 0");
        session.check_answer(0);

        session.jump_to(2);
        session.select_option(2, "wrong a 2");
        session.check_answer(2);

        session.advance();
        assert!(session.completed());
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn unchecked_but_correct_answer_still_scores() {
        // Scoring only compares answers to correct options; check status
        // does not gate the tally.
        let mut session = session(1);
        session.select_option(0, "right 0");
        session.advance();
        assert_eq!(session.score(), Some(1));
    }

    #[test]
    fn no_navigation_once_completed() {
        let mut session = session(2);
        session.advance();
        session.advance();
        assert!(session.completed());

        session.retreat();
        session.jump_to(0);
        assert_eq!(session.current_index(), 1);

        session.select_option(1, "right 1");
        assert_eq!(session.answer(1), None);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = session(2);
        session.select_option(0, "right 0");
        session.check_answer(0);
        session.advance();
        session.advance();
        assert!(session.completed());

        session.restart((0..3).map(question).collect());
        assert_eq!(session.questions().len(), 3);
        assert_eq!(session.current_index(), 0);
        assert!(!session.completed());
        assert_eq!(session.score(), None);
        assert_eq!(session.answer(0), None);
        assert!(!session.is_checked(0));
    }
}
