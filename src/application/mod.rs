//! Application layer - one handler per operation, wired by the composition root.

pub mod handlers;
