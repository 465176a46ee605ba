//! Test helpers shared by the quiz backend's unit and integration tests:
//! one-time log initialisation and ProblemDetails / redirect assertions.

pub mod problem_details;
pub mod test_logging;

pub use problem_details::{assert_problem_details, assert_redirect};
