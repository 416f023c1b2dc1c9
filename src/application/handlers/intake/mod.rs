//! Intake handlers - the AI-driven conversation steps.

mod request_followup;
mod request_solution;

pub use request_followup::{FollowUpResult, RequestFollowUpCommand, RequestFollowUpHandler};
pub use request_solution::{RequestSolutionCommand, RequestSolutionHandler, SolutionResult};
