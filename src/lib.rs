//! LawAssist - Legal Intake Assistant Backend
//!
//! This crate guides a user through a multi-turn legal-intake conversation
//! and produces a single AI-generated structured solution document per case.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
