use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::brain::{AiAnalysis, Category, Sentiment, UrgencyLevel};

/// Lifecycle state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

/// Where the reported problem happened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintMetadata {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub train_number: Option<String>,
    #[serde(default)]
    pub coach_number: Option<String>,
}

/// A complaint as submitted by a passenger, before analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    /// The ID of the submitting user.
    #[validate(length(min = 1))]
    pub user_id: String,
    /// Short summary of the problem.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Free-text description of the problem.
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    /// Attached photos or videos. Only the count feeds classification.
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub metadata: ComplaintMetadata,
}

/// A classified complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// The unique identifier for the complaint (`complaint-<uuid>`).
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub urgency_level: UrgencyLevel,
    pub urgency_score: f64,
    pub status: ComplaintStatus,
    pub media_urls: Vec<String>,
    pub metadata: ComplaintMetadata,
    #[serde(default)]
    pub department_id: Option<String>,
    /// Staff member the complaint is assigned to.
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub ai_analysis: AiAnalysis,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set on each move to `resolved`.
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// A rating left on a complaint, before sentiment analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    #[validate(length(min = 1))]
    pub complaint_id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Stored feedback, with sentiment when a comment was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub complaint_id: String,
    pub user_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    User,
    Bot,
}

/// Represents a single message in the support chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    /// Complaint the conversation is about, if any.
    #[serde(default)]
    pub complaint_id: Option<String>,
    pub user_id: String,
    pub message: String,
    pub sender_type: SenderType,
    pub created_at: DateTime<Utc>,
}
