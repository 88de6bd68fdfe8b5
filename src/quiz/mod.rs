mod generator;
mod prompt;
mod types;

pub use generator::{QuizGenerator, parse_quiz, strip_code_fence};
pub use prompt::build_prompt;
pub use types::{Quiz, QuizQuestion, QuizRequest};
