use crate::errors::TransitionError;
use crate::models::{ChatMessage, Role};
use chrono::{DateTime, Utc};

pub const CANNED_REPLY: &str = "I understand you're sharing your thoughts with me. Remember that it's completely normal to have ups and downs. What specific aspect of your mood would you like to explore today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingReply,
}

/// Chat transcript. Messages are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    state: ChatState,
}

impl Transcript {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.state == ChatState::AwaitingReply
    }

    /// Appends a user turn. Blank input is ignored and yields `Ok(None)`.
    pub fn send(
        &mut self,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<&ChatMessage>, TransitionError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if self.is_awaiting_reply() {
            return Err(TransitionError::ReplyPending);
        }

        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
            timestamp: at,
        });
        self.state = ChatState::AwaitingReply;
        Ok(self.messages.last())
    }

    pub fn deliver_reply(
        &mut self,
        content: String,
        at: DateTime<Utc>,
    ) -> Result<&ChatMessage, TransitionError> {
        if !self.is_awaiting_reply() {
            return Err(TransitionError::NoReplyPending);
        }

        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content,
            timestamp: at,
        });
        self.state = ChatState::Idle;
        self.messages.last().ok_or(TransitionError::NoReplyPending)
    }

    /// Returns to `Idle` without appending a reply.
    pub fn abandon_reply(&mut self) {
        self.state = ChatState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_leaves_transcript_unchanged() {
        let mut transcript = Transcript::default();
        assert_eq!(transcript.send("", Utc::now()), Ok(None));
        assert_eq!(transcript.send("   ", Utc::now()), Ok(None));
        assert!(transcript.messages().is_empty());
        assert_eq!(transcript.state(), ChatState::Idle);
    }

    #[test]
    fn send_then_reply_appends_two_messages_in_order() {
        let mut transcript = Transcript::default();
        let sent = transcript.send("hello", Utc::now()).unwrap().cloned();
        assert_eq!(sent.map(|m| m.role), Some(Role::User));
        assert_eq!(transcript.state(), ChatState::AwaitingReply);

        transcript
            .deliver_reply(CANNED_REPLY.to_string(), Utc::now())
            .unwrap();

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(transcript.messages()[0].content, "hello");
        assert_eq!(transcript.messages()[1].content, CANNED_REPLY);
        assert_eq!(transcript.state(), ChatState::Idle);
    }

    #[test]
    fn second_send_waits_for_reply() {
        let mut transcript = Transcript::default();
        transcript.send("one", Utc::now()).unwrap();
        assert_eq!(
            transcript.send("two", Utc::now()).unwrap_err(),
            TransitionError::ReplyPending
        );
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn abandoned_reply_frees_the_transcript() {
        let mut transcript = Transcript::default();
        transcript.send("one", Utc::now()).unwrap();
        transcript.abandon_reply();
        assert_eq!(transcript.state(), ChatState::Idle);
        assert!(transcript.send("two", Utc::now()).unwrap().is_some());
        assert_eq!(transcript.messages().len(), 2);
    }

    #[test]
    fn reply_without_prompt_is_rejected() {
        let mut transcript = Transcript::default();
        assert_eq!(
            transcript
                .deliver_reply("hi".into(), Utc::now())
                .unwrap_err(),
            TransitionError::NoReplyPending
        );
    }
}
