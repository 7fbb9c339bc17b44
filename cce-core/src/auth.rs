//! Sign-in provider seam.

use crate::record::User;

/// Anything that can say who is signed in right now.
pub trait AuthProvider {
    fn current_user(&self) -> Option<User>;
}

/// Fixed identity, mostly for one-shot commands and tests.
impl AuthProvider for Option<User> {
    fn current_user(&self) -> Option<User> {
        self.clone()
    }
}

/// Sign-in state change pushed by the provider.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AuthEvent {
    SignedIn(User),
    SignedOut,
}

impl From<Option<User>> for AuthEvent {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => AuthEvent::SignedIn(user),
            None => AuthEvent::SignedOut,
        }
    }
}
