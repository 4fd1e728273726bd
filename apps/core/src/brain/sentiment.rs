//! Sentiment scoring for feedback comments.
//!
//! Counts fixed positive and negative words by presence. The score is not
//! clamped, so many hits can push it past 1.0.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords::count_hits;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "satisfied",
    "happy",
    "thanks",
    "appreciate",
    "helpful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "disappointed",
    "unhappy",
    "worse",
    "awful",
    "useless",
];

/// Polarity of a piece of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a comment; identical text always yields an identical result
    pub fn score(&self, text: &str) -> SentimentResult {
        let text = text.to_lowercase();

        let positive = count_hits(&text, POSITIVE_WORDS);
        let negative = count_hits(&text, NEGATIVE_WORDS);

        if positive > negative {
            SentimentResult {
                sentiment: Sentiment::Positive,
                score: 0.7 + positive as f64 * 0.1,
            }
        } else if negative > positive {
            SentimentResult {
                sentiment: Sentiment::Negative,
                score: 0.7 + negative as f64 * 0.1,
            }
        } else {
            SentimentResult {
                sentiment: Sentiment::Neutral,
                score: 0.5,
            }
        }
    }
}
