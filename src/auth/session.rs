use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

use crate::auth::User;
use crate::entities::Role;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub access_token: String,
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    pub fn to_user(&self, role: Option<Role>) -> User {
        User::new(self.user.id, role)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

impl AuthEvent {
    fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => Self::SignedIn(session),
            None => Self::SignedOut,
        }
    }
}

// One client's session. Clones share the same holder.
#[derive(Clone, Debug)]
pub struct SessionState {
    sender: Arc<watch::Sender<Option<Session>>>,
}

impl SessionState {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn signed_in(session: Session) -> Self {
        let state = Self::new();
        state.replace(Some(session));
        state
    }

    // expired sessions are cleared on read
    pub fn current(&self) -> Option<Session> {
        let session = self.sender.borrow().clone();

        match session {
            Some(session) if session.is_expired() => {
                tracing::info!("session for user {} expired", session.user.id);
                self.sender.send_replace(None);
                None
            }
            other => other,
        }
    }

    pub fn replace(&self, session: Option<Session>) {
        self.sender.send_replace(session);
    }

    pub fn sign_out(&self) {
        if let Some(session) = self.sender.send_replace(None) {
            tracing::info!("user {} signed out", session.user.id);
        }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Subscription {
    receiver: watch::Receiver<Option<Session>>,
}

impl Subscription {
    pub async fn next(&mut self) -> Option<AuthEvent> {
        self.receiver.changed().await.ok()?;
        let session = self.receiver.borrow_and_update().clone();

        Some(AuthEvent::from_session(session))
    }

    pub fn unsubscribe(self) {}
}
