use pretty_assertions::assert_eq;
use quizit_rust::{
    quiz::Quiz,
    session::{AnswerOutcome, EMPTY_QUIZ_ERROR, QuizSession, SessionState},
};

mod common;

use common::mocks::five_question_quiz_json;

fn five_question_quiz() -> Quiz {
    serde_json::from_str(&five_question_quiz_json()).unwrap()
}

fn session_with_quiz() -> QuizSession {
    let mut session = QuizSession::new();
    session.set_input("a sufficiently long source text");
    assert!(session.start_submission().is_some());
    session.complete_submission(Ok(five_question_quiz()));
    assert_eq!(session.state(), SessionState::InProgress);
    session
}

#[test]
fn full_run_scores_exact_matches_only() {
    let mut session = session_with_quiz();

    // Correct answers are "A1".."A5"; answer three right, two wrong
    assert_eq!(session.answer("A1"), AnswerOutcome::Correct);
    assert_eq!(session.answer("B2"), AnswerOutcome::Incorrect);
    assert_eq!(session.answer("A3"), AnswerOutcome::Correct);
    assert_eq!(session.answer("a4"), AnswerOutcome::Incorrect); // case-sensitive
    assert_eq!(session.answer("A5"), AnswerOutcome::Correct);

    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.score(), 3);
    assert_eq!(session.total_questions(), 5);
}

#[test]
fn index_stays_in_bounds_until_the_last_answer() {
    let mut session = session_with_quiz();

    for expected_index in 0..5 {
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.current_index(), expected_index);
        assert!(session.current_index() < session.total_questions());

        let question = session.current_question().unwrap();
        assert_eq!(question.question, format!("Question {}?", expected_index + 1));

        session.answer("whatever");
    }

    // The Finished transition happens exactly once, on the fifth answer
    assert_eq!(session.state(), SessionState::Finished);
    assert_eq!(session.current_index(), 4);
}

#[test]
fn answers_after_finish_change_nothing() {
    let mut session = session_with_quiz();
    for _ in 0..5 {
        session.answer("A1");
    }
    let score_at_finish = session.score();
    let index_at_finish = session.current_index();

    for _ in 0..3 {
        assert_eq!(session.answer("A1"), AnswerOutcome::Ignored);
    }

    assert_eq!(session.score(), score_at_finish);
    assert_eq!(session.current_index(), index_at_finish);
    assert_eq!(session.state(), SessionState::Finished);
}

#[test]
fn empty_quiz_response_never_starts_the_session() {
    let mut session = QuizSession::new();
    session.set_input("some text");
    session.start_submission().unwrap();
    session.complete_submission(Ok(Quiz::default()));

    assert_eq!(session.state(), SessionState::NotStarted);
    assert_eq!(session.error(), Some(EMPTY_QUIZ_ERROR));
    assert_eq!(session.answer("A1"), AnswerOutcome::Ignored);
}

#[test]
fn reset_allows_a_fresh_attempt() {
    let mut session = session_with_quiz();
    for _ in 0..5 {
        session.answer("A1");
    }
    assert_eq!(session.state(), SessionState::Finished);

    session.reset();
    assert_eq!(session.state(), SessionState::NotStarted);

    session.set_input("a second text");
    assert!(session.start_submission().is_some());
    session.complete_submission(Ok(five_question_quiz()));
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.score(), 0);
}
