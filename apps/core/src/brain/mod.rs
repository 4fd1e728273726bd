//! # Brain Module
//!
//! Deterministic, rule-based analysis for Rail Madad complaints.
//! Plain substring matching against fixed keyword tables; no model, no I/O.
//!
//! ## Components
//! - `catalog`: Department catalog and name lookup
//! - `keywords`: Category and urgency keyword tables
//! - `classifier`: Category, urgency and department routing
//! - `sentiment`: Feedback sentiment scoring
//! - `responder`: Canned chatbot replies

pub mod catalog;
pub mod classifier;
pub mod keywords;
pub mod responder;
pub mod sentiment;

pub use catalog::{default_departments, Department};
pub use classifier::{AiAnalysis, ClassificationResult, ComplaintClassifier, UrgencyLevel};
pub use keywords::Category;
pub use responder::{ChatContext, ChatResponder, ReplyKind};
pub use sentiment::{Sentiment, SentimentResult, SentimentScorer};

/// Classify a complaint against the built-in department catalog
pub fn classify(title: &str, description: &str, media_count: usize) -> ClassificationResult {
    ComplaintClassifier::new().classify(title, description, media_count)
}

/// Score the sentiment of a feedback comment
pub fn score_sentiment(text: &str) -> SentimentResult {
    SentimentScorer::new().score(text)
}

/// Select the canned chatbot reply for a message
pub fn select_response(message: &str, context: &ChatContext) -> String {
    ChatResponder::new().respond(message, context)
}
