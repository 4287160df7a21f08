//! Per-session conversation state
//!
//! Each browser tab gets one session: an ordered message list seeded with
//! the system message, plus the event channel feeding its SSE stream.
//! Sessions live in memory only and are dropped with the process.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::mpsc;

use crate::services::chat::SYSTEM_PROMPT;
use crate::types::{Message, StreamEvent};

const EVENT_CHANNEL_CAPACITY: usize = 100;

pub struct SessionManager {
    sessions: HashMap<String, Session>,
}

pub struct Session {
    pub id: String,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    event_sender: mpsc::Sender<StreamEvent>,
    event_receiver: Option<mpsc::Receiver<StreamEvent>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    pub fn create_session(&mut self, id: &str) -> &Session {
        let (event_sender, event_receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let now = Utc::now();

        let session = Session {
            id: id.to_string(),
            messages: vec![Message::system(SYSTEM_PROMPT)],
            created_at: now,
            updated_at: now,
            event_sender,
            event_receiver: Some(event_receiver),
        };

        self.sessions.entry(id.to_string()).or_insert(session)
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn get_or_create(&mut self, id: &str) -> &mut Session {
        if !self.sessions.contains_key(id) {
            self.create_session(id);
        }
        self.sessions.get_mut(id).expect("session just created")
    }

    /// Take the receiving end of a session's event channel for an SSE
    /// connection. A reconnecting client re-arms the channel with a fresh
    /// pair instead of erroring.
    pub fn take_receiver(&mut self, id: &str) -> mpsc::Receiver<StreamEvent> {
        let session = self.get_or_create(id);
        match session.event_receiver.take() {
            Some(receiver) => receiver,
            None => {
                let (sender, receiver) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
                session.event_sender = sender;
                receiver
            }
        }
    }

    pub fn count(&self) -> usize {
        self.sessions.len()
    }
}

impl Session {
    /// Append a message; history only ever grows.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    pub fn sender(&self) -> mpsc::Sender<StreamEvent> {
        self.event_sender.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn new_sessions_start_with_the_system_message() {
        let mut manager = SessionManager::new();
        let session = manager.create_session("s1");

        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, Role::System);
        assert_eq!(session.messages[0].content, SYSTEM_PROMPT);
    }

    #[test]
    fn one_canned_turn_yields_system_user_assistant() {
        let mut manager = SessionManager::new();
        let session = manager.get_or_create("s1");

        session.push(Message::user("I have a wifi issue"));
        session.push(Message::assistant(crate::services::advice::WIFI_FIX));

        let roles: Vec<Role> = session.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant]);
        assert_eq!(
            session.messages[2].content,
            crate::services::advice::WIFI_FIX
        );
    }

    #[test]
    fn consecutive_assistant_messages_are_tolerated() {
        let mut manager = SessionManager::new();
        let session = manager.get_or_create("s1");

        session.push(Message::assistant("first canned reply"));
        session.push(Message::assistant("second canned reply"));

        assert_eq!(session.messages.len(), 3);
    }

    #[test]
    fn create_session_is_idempotent() {
        let mut manager = SessionManager::new();
        manager.create_session("s1");
        manager.get_or_create("s1").push(Message::user("hello"));
        manager.create_session("s1");

        // Re-creating must not wipe the existing history.
        assert_eq!(manager.get("s1").unwrap().messages.len(), 2);
        assert_eq!(manager.count(), 1);
    }

    #[tokio::test]
    async fn reconnecting_rearms_the_event_channel() {
        let mut manager = SessionManager::new();
        manager.create_session("s1");

        let first = manager.take_receiver("s1");
        drop(first);
        let mut second = manager.take_receiver("s1");

        let sender = manager.get("s1").unwrap().sender();
        sender
            .send(StreamEvent::MessageComplete {
                message_id: "m1".into(),
            })
            .await
            .unwrap();

        assert!(matches!(
            second.recv().await,
            Some(StreamEvent::MessageComplete { .. })
        ));
    }
}
