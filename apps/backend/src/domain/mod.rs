//! Domain layer: pure quiz logic, free of HTTP and storage concerns.

pub mod level;
pub mod question;
pub mod round;
pub mod rules;


// Re-exports for ergonomics
pub use level::Level;
pub use question::{generate_question, Operator, Question};
pub use round::{
    parse_answer, parse_timeleft, AnswerOutcome, RoundResult, RoundState, RoundStep, StartRequest,
};
pub use rules::ROUND_SECONDS;
