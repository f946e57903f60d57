//! Session State
//!
//! The client's belief about whether the user is signed in.

use crate::models::UserProfile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    authenticated: bool,
    user: Option<UserProfile>,
    /// The one-shot probe already ran
    probed: bool,
    /// Bumped on every sign-in/sign-out
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Profile, only while signed in
    pub fn user(&self) -> Option<&UserProfile> {
        if self.authenticated { self.user.as_ref() } else { None }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Mark the probe as started. Returns false if it already ran.
    pub fn begin_probe(&mut self) -> bool {
        !std::mem::replace(&mut self.probed, true)
    }

    /// Signed in with a known profile (probe or profile fetch)
    pub fn authenticate(&mut self, user: UserProfile) {
        if !self.authenticated {
            self.epoch += 1;
        }
        self.authenticated = true;
        self.user = Some(user);
    }

    /// Signed in via login/registration; profile not known yet
    pub fn sign_in(&mut self) {
        if !self.authenticated {
            self.epoch += 1;
            self.user = None;
        }
        self.authenticated = true;
    }

    pub fn sign_out(&mut self) {
        if self.authenticated {
            self.epoch += 1;
        }
        self.authenticated = false;
        self.user = None;
    }
}
