//! Operation handlers.
//!
//! Every inbound operation has exactly one handler struct holding its port
//! dependencies behind `Arc<dyn ...>`. Handlers check validation and
//! authorization before any mutation; generation and persistence failures
//! map to generic failures with no compensating rollback of steps already
//! committed.

pub mod case;
pub mod intake;
pub mod user;
