//! Rail Madad complaint intake core.
//!
//! "The Brain" classifies complaints, scores feedback sentiment and picks
//! chatbot replies; `intake` wraps it into record-producing operations.

pub mod brain;
pub mod config;
pub mod error;
pub mod intake;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{classify, score_sentiment, select_response};
pub use error::{AppError, Result};
