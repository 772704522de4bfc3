//! Shared foundation for the menage conversational context subsystem.
//!
//! Provides the identifier types that tag turns and sessions, and the
//! `Result` alias every crate builds its error reporting on.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ParseIdError, SessionId, TurnId};
