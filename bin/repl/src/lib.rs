//! Interactive shell for the menage conversational context.
//!
//! Stands in for the UI layer: reads prompts from stdin, shows recalled
//! context, and records each exchange.

pub mod config;
pub mod responder;
