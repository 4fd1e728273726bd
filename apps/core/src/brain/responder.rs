//! Canned chat replies.
//!
//! A fixed, ordered decision table over substring triggers. The first
//! matching rule wins; the complaint-on-record rule only applies when no
//! trigger matched.

use serde::{Deserialize, Serialize};

/// What the responder knows about the user it is replying to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatContext {
    /// The user has at least one complaint on record
    pub has_complaint: bool,
}

/// Which canned reply was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Greeting,
    StatusTracking,
    Emergency,
    NewComplaint,
    ComplaintInProgress,
    Fallback,
}

impl ReplyKind {
    pub fn message(&self) -> &'static str {
        match self {
            ReplyKind::Greeting => "Hello! I'm your Rail Madad AI assistant. I can help you file complaints, check status, or answer questions. How can I assist you today?",
            ReplyKind::StatusTracking => "You can track your complaint status in the \"My Complaints\" section. Each complaint has a unique ID and real-time status updates.",
            ReplyKind::Emergency => "For urgent or emergency situations, please contact railway security immediately. You can also file a high-priority complaint through our system for faster routing.",
            ReplyKind::NewComplaint => "I can help you file a complaint. Please click on \"New Complaint\" and provide details including photos or videos if available. Our AI will automatically categorize and prioritize your complaint.",
            ReplyKind::ComplaintInProgress => "Your complaint has been received and analyzed by our AI system. It has been automatically categorized and assigned to the appropriate department. You will receive updates as it progresses.",
            ReplyKind::Fallback => "I'm here to help! You can ask me about filing complaints, checking status, or any railway service issues. What would you like to know?",
        }
    }
}

/// Trigger table, checked top to bottom
const TRIGGERS: &[(ReplyKind, &[&str])] = &[
    (ReplyKind::Greeting, &["hello", "hi"]),
    (ReplyKind::StatusTracking, &["status", "track"]),
    (ReplyKind::Emergency, &["urgent", "emergency"]),
    (ReplyKind::NewComplaint, &["complaint", "issue", "problem"]),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ChatResponder;

impl ChatResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick the reply rule for a message
    pub fn select(&self, message: &str, context: &ChatContext) -> ReplyKind {
        let message = message.to_lowercase();

        TRIGGERS
            .iter()
            .find(|(_, triggers)| triggers.iter().any(|t| message.contains(t)))
            .map(|(kind, _)| *kind)
            .unwrap_or(if context.has_complaint {
                ReplyKind::ComplaintInProgress
            } else {
                ReplyKind::Fallback
            })
    }

    /// Reply text for a message
    pub fn respond(&self, message: &str, context: &ChatContext) -> String {
        self.select(message, context).message().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_COMPLAINT: ChatContext = ChatContext { has_complaint: false };
    const WITH_COMPLAINT: ChatContext = ChatContext { has_complaint: true };

    #[test]
    fn test_greeting_wins_over_later_triggers() {
        let responder = ChatResponder::new();

        assert_eq!(responder.select("Hello there", &NO_COMPLAINT), ReplyKind::Greeting);
        assert_eq!(
            responder.select("hello, urgent problem", &WITH_COMPLAINT),
            ReplyKind::Greeting
        );
    }

    #[test]
    fn test_status_checked_before_problem() {
        let responder = ChatResponder::new();

        assert_eq!(
            responder.select("I have a problem with status", &NO_COMPLAINT),
            ReplyKind::StatusTracking
        );
    }

    #[test]
    fn test_emergency_trigger() {
        let responder = ChatResponder::new();

        assert_eq!(
            responder.select("EMERGENCY in coach S4", &NO_COMPLAINT),
            ReplyKind::Emergency
        );
    }

    #[test]
    fn test_context_only_used_without_trigger() {
        let responder = ChatResponder::new();

        assert_eq!(responder.select("ok", &WITH_COMPLAINT), ReplyKind::ComplaintInProgress);
        assert_eq!(responder.select("ok", &NO_COMPLAINT), ReplyKind::Fallback);
        assert_eq!(responder.select("", &NO_COMPLAINT), ReplyKind::Fallback);
    }

    #[test]
    fn test_respond_returns_message_text() {
        let responder = ChatResponder::new();

        let reply = responder.respond("There is an issue", &NO_COMPLAINT);
        assert!(reply.starts_with("I can help you file a complaint."));
    }
}
