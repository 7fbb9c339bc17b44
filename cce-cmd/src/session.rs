//! Sign-in session with change notifications.
//!
//! The current user lives in a `tokio::sync::watch` channel, so any number of
//! subscribers see the latest state and are woken on every change.

use cce_core::{AuthEvent, AuthProvider, User};
use tokio::sync::watch;

pub struct AuthSession {
    tx: watch::Sender<Option<User>>,
}

impl AuthSession {
    pub fn new(initial: Option<User>) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn sign_in(&self, user: User) {
        log::info!("session: signed in as {}", user.display_name());
        self.tx.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        log::info!("session: signed out");
        self.tx.send_replace(None);
    }

    pub fn subscribe(&self) -> AuthEvents {
        AuthEvents {
            rx: self.tx.subscribe(),
        }
    }
}

impl AuthProvider for AuthSession {
    fn current_user(&self) -> Option<User> {
        self.tx.borrow().clone()
    }
}

/// Stream of sign-in changes for one subscriber.
pub struct AuthEvents {
    rx: watch::Receiver<Option<User>>,
}

impl AuthEvents {
    /// The state right now, marking it as seen.
    pub fn current(&mut self) -> AuthEvent {
        AuthEvent::from(self.rx.borrow_and_update().clone())
    }

    /// Wait for the next change. `None` once the session is gone.
    pub async fn next(&mut self) -> Option<AuthEvent> {
        self.rx.changed().await.ok()?;
        Some(self.current())
    }
}
