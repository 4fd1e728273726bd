//! Complaint intake flow.
//!
//! Turns validated drafts into classified records and answers chat
//! messages. Persistence is left to the caller: every operation returns the
//! records it produced instead of storing them.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::brain::{
    ChatContext, ChatResponder, ComplaintClassifier, Department, SentimentScorer,
};
use crate::error::{AppError, Result};
use crate::models::{
    ChatMessage, Complaint, ComplaintDraft, ComplaintStatus, Feedback, FeedbackDraft, SenderType,
};

/// Orchestrates classification, sentiment scoring and chat replies
#[derive(Default)]
pub struct IntakeService {
    classifier: ComplaintClassifier,
    sentiment: SentimentScorer,
    responder: ChatResponder,
}

impl IntakeService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route complaints to a custom department catalog
    pub fn with_departments(departments: Vec<Department>) -> Self {
        Self {
            classifier: ComplaintClassifier::with_departments(departments),
            ..Self::default()
        }
    }

    pub fn departments(&self) -> &[Department] {
        self.classifier.departments()
    }

    /// Validate and classify a new complaint. It starts out `pending`.
    pub fn file_complaint(&self, draft: ComplaintDraft) -> Result<Complaint> {
        draft.validate()?;

        let analysis =
            self.classifier
                .classify(&draft.title, &draft.description, draft.media_urls.len());
        let now = Utc::now();

        let complaint = Complaint {
            id: format!("complaint-{}", Uuid::new_v4()),
            user_id: draft.user_id,
            title: draft.title,
            description: draft.description,
            category: analysis.category,
            urgency_level: analysis.urgency_level,
            urgency_score: analysis.urgency_score,
            status: ComplaintStatus::Pending,
            media_urls: draft.media_urls,
            metadata: draft.metadata,
            department_id: analysis.department_id,
            assigned_to: None,
            ai_analysis: analysis.ai_analysis,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        };

        info!(
            "Filed {}: {} / {} ({:.2})",
            complaint.id, complaint.category, complaint.urgency_level, complaint.urgency_score
        );
        if complaint.department_id.is_none() {
            warn!(
                "No department named '{}' in catalog, {} left unrouted",
                complaint.category, complaint.id
            );
        }

        Ok(complaint)
    }

    /// Move a complaint to a new status.
    ///
    /// Every move to `Resolved` stamps `resolved_at`, so a reopened complaint
    /// reports its latest resolution.
    pub fn update_status(&self, complaint: &mut Complaint, status: ComplaintStatus) {
        let now = Utc::now();
        if status == ComplaintStatus::Resolved {
            complaint.resolved_at = Some(now);
        }
        info!("{}: {:?} -> {:?}", complaint.id, complaint.status, status);
        complaint.status = status;
        complaint.updated_at = now;
    }

    pub fn assign(&self, complaint: &mut Complaint, assignee: &str) -> Result<()> {
        if assignee.trim().is_empty() {
            return Err(AppError::Validation("assignee must not be empty".to_string()));
        }
        complaint.assigned_to = Some(assignee.to_string());
        complaint.updated_at = Utc::now();
        Ok(())
    }

    /// Validate feedback and score its comment, if it has one
    pub fn record_feedback(&self, draft: FeedbackDraft) -> Result<Feedback> {
        draft.validate()?;

        let scored = draft
            .comment
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| self.sentiment.score(c));

        let feedback = Feedback {
            id: format!("feedback-{}", Uuid::new_v4()),
            complaint_id: draft.complaint_id,
            user_id: draft.user_id,
            rating: draft.rating,
            comment: draft.comment,
            sentiment: scored.map(|s| s.sentiment),
            sentiment_score: scored.map(|s| s.score),
            created_at: Utc::now(),
        };

        info!(
            "Feedback {} on {}: rating {}, sentiment {:?}",
            feedback.id, feedback.complaint_id, feedback.rating, feedback.sentiment
        );
        Ok(feedback)
    }

    /// Answer a chat message.
    ///
    /// `known_complaints` is whatever the caller has on record; only the
    /// user's ownership of at least one of them matters. Returns the user's
    /// message followed by the bot reply.
    pub fn chat_turn(
        &self,
        user_id: &str,
        message: &str,
        known_complaints: &[Complaint],
    ) -> Result<(ChatMessage, ChatMessage)> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("chat message must not be empty".to_string()));
        }

        let context = ChatContext {
            has_complaint: known_complaints.iter().any(|c| c.user_id == user_id),
        };
        let reply = self.responder.select(message, &context);
        info!("Chat reply for {}: {:?}", user_id, reply);

        let asked = chat_message(user_id, message, SenderType::User);
        let answered = chat_message(user_id, reply.message(), SenderType::Bot);
        Ok((asked, answered))
    }
}

fn chat_message(user_id: &str, message: &str, sender_type: SenderType) -> ChatMessage {
    ChatMessage {
        id: format!("msg-{}", Uuid::new_v4()),
        complaint_id: None,
        user_id: user_id.to_string(),
        message: message.to_string(),
        sender_type,
        created_at: Utc::now(),
    }
}
