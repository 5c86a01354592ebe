//! Principals: admins and PIN-holding users
//!
//! This module contains the credential-based replacement for the usual
//! admin/user class hierarchy: a shared [`Identity`] plus a [`Credential`]
//! capability enum, dispatched through the [`Role`] tag on lock requests.

use crate::access::identity::{Identity, Pin};
use crate::access::UserDirectory;
use crate::system::DoorSystem;
use crate::types::{AccessOutcome, PersonId, Role};
use tracing::warn;

/// Role-specific capability of a principal
///
/// Admins carry no secret and bypass the PIN check entirely; that is a design
/// given of the simulated lock, not a bug. Users carry their PIN.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Administrator: unlocks without a PIN, may register users
    Admin,
    /// PIN-holding user
    Pin(Pin),
}

/// A person that can request access: an admin or a PIN-holding user
#[derive(Debug, Clone)]
pub struct Principal {
    /// Identity of the principal
    pub identity: Identity,
    credential: Credential,
}

impl Principal {
    /// Create an administrator
    pub fn admin(name: impl Into<String>, id: impl Into<PersonId>) -> Self {
        Self { identity: Identity::new(name, id), credential: Credential::Admin }
    }

    /// Create a PIN-holding user
    pub fn user(
        name: impl Into<String>,
        id: impl Into<PersonId>,
        pin: impl Into<String>,
    ) -> Self {
        Self { identity: Identity::new(name, id), credential: Credential::Pin(Pin::new(pin)) }
    }

    /// The role tag this principal uses on lock requests
    pub fn role(&self) -> Role {
        match self.credential {
            Credential::Admin => Role::Admin,
            Credential::Pin(_) => Role::User,
        }
    }

    /// Whether this principal is an administrator
    pub fn is_admin(&self) -> bool {
        matches!(self.credential, Credential::Admin)
    }

    /// Check an entered PIN against this principal's stored secret
    ///
    /// Exact string match. Always false for admins: they hold no PIN to
    /// match (their access path never consults one).
    pub fn is_pin_correct(&self, entered: &str) -> bool {
        match &self.credential {
            Credential::Admin => false,
            Credential::Pin(pin) => pin.matches(entered),
        }
    }

    /// Request the door to open
    ///
    /// Admins unlock unconditionally with role `admin` (the entered PIN, if
    /// any, is ignored). Users unlock with role `user` when the entered PIN
    /// matches; otherwise the request is denied, leaving the lock state
    /// untouched. Denials are ordinary outcomes, never errors.
    pub fn open_door(&self, system: &mut DoorSystem, entered_pin: Option<&str>) -> AccessOutcome {
        match &self.credential {
            Credential::Admin => {
                system.unlock_door(Role::Admin, &self.identity).into_access_outcome()
            }
            Credential::Pin(pin) => {
                if entered_pin.is_some_and(|entered| pin.matches(entered)) {
                    system.unlock_door(Role::User, &self.identity).into_access_outcome()
                } else {
                    system.deny_wrong_pin(&self.identity)
                }
            }
        }
    }

    /// Attempt access over the remote channel
    ///
    /// Always denied; remote access is categorically unsupported. This is a
    /// stubbed policy, not a protocol check.
    pub fn try_remote_access(&self, system: &mut DoorSystem) -> AccessOutcome {
        system.remote_access_not_allowed(&self.identity)
    }

    /// Register a user in the directory (admin capability)
    ///
    /// Returns whether the user was registered. Non-admin principals cannot
    /// register users; the attempt is traced and refused.
    pub fn register_user(&self, directory: &mut UserDirectory, user: Principal) -> bool {
        if !self.is_admin() {
            warn!(
                requester = %self.identity,
                "Registration refused: only admins can register users"
            );
            return false;
        }
        directory.add_user(user);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_role_and_capability() {
        let admin = Principal::admin("Sarim", "S001");
        assert_eq!(admin.role(), Role::Admin);
        assert!(admin.is_admin());
    }

    #[test]
    fn test_user_role() {
        let user = Principal::user("Zara", "Z101", "8585");
        assert_eq!(user.role(), Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_pin_check() {
        let user = Principal::user("Zara", "Z101", "8585");
        assert!(user.is_pin_correct("8585"));
        assert!(!user.is_pin_correct("5678"));
        assert!(!user.is_pin_correct(""));
    }

    #[test]
    fn test_admin_has_no_pin_to_match() {
        let admin = Principal::admin("Sarim", "S001");
        assert!(!admin.is_pin_correct("8585"));
        assert!(!admin.is_pin_correct(""));
    }

    #[test]
    fn test_admin_registers_user() {
        let admin = Principal::admin("Sarim", "S001");
        let mut directory = UserDirectory::new();

        assert!(admin.register_user(&mut directory, Principal::user("Zara", "Z101", "8585")));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_user_cannot_register_users() {
        let user = Principal::user("Zara", "Z101", "8585");
        let mut directory = UserDirectory::new();

        assert!(!user.register_user(&mut directory, Principal::user("Sara", "S102", "1234")));
        assert!(directory.is_empty());
    }
}
