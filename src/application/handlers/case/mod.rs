//! Case CRUD handlers.

mod append_message;
mod create_case;
mod get_case;
mod list_cases;

pub use append_message::{AppendMessageCommand, AppendMessageHandler};
pub use create_case::{CreateCaseCommand, CreateCaseHandler, CreateCaseResult};
pub use get_case::{CaseDetail, GetCaseHandler, GetCaseQuery};
pub use list_cases::{ListCasesHandler, ListCasesQuery};
