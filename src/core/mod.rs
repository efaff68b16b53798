//! Core domain models for create-module
//!
//! This module defines the shared context, the step abstraction, the
//! error taxonomy and the configuration a scaffolding run works with.

pub mod config;
pub mod context;
pub mod error;
pub mod manifest;
pub mod state;
pub mod step;

pub use config::ScaffoldConfig;
pub use context::*;
pub use error::ScaffoldError;
pub use state::*;
pub use step::*;
