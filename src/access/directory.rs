//! User directory
//!
//! Ordered registry of PIN-holding users, looked up by person id.

use crate::access::Principal;
use crate::types::PersonId;
use tracing::debug;

/// Ordered registry of registered users
///
/// Append-only within a run: there is no uniqueness validation and no
/// capacity bound. Duplicate ids are permitted; lookup returns the first
/// match in registration order.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    records: Vec<Principal>,
}

impl UserDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user to the registry
    pub fn add_user(&mut self, user: Principal) {
        debug!(user = %user.identity, "User registered");
        self.records.push(user);
    }

    /// Find a user by id (linear scan, first match wins)
    pub fn find_user_by_id(&self, id: &PersonId) -> Option<&Principal> {
        self.records.iter().find(|user| &user.identity.id == id)
    }

    /// Number of registered records (duplicates counted)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the registered users in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Principal> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_directory() {
        let directory = UserDirectory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert!(directory.find_user_by_id(&PersonId::new("Z101")).is_none());
    }

    #[test]
    fn test_add_and_find_user() {
        let mut directory = UserDirectory::new();
        directory.add_user(Principal::user("Zara", "Z101", "8585"));
        directory.add_user(Principal::user("Sara", "S102", "1234"));

        assert_eq!(directory.len(), 2);

        let found = directory.find_user_by_id(&PersonId::new("S102"));
        assert_eq!(found.map(|user| user.identity.name.as_str()), Some("Sara"));
    }

    #[test]
    fn test_find_missing_user_returns_none() {
        let mut directory = UserDirectory::new();
        directory.add_user(Principal::user("Zara", "Z101", "8585"));

        assert!(directory.find_user_by_id(&PersonId::new("X999")).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut directory = UserDirectory::new();
        directory.add_user(Principal::user("Zara", "Z101", "8585"));
        directory.add_user(Principal::user("Imposter", "Z101", "0000"));

        assert_eq!(directory.len(), 2);

        let found = directory.find_user_by_id(&PersonId::new("Z101")).unwrap();
        assert_eq!(found.identity.name, "Zara");
    }

    #[test]
    fn test_iteration_preserves_registration_order() {
        let mut directory = UserDirectory::new();
        directory.add_user(Principal::user("Zara", "Z101", "8585"));
        directory.add_user(Principal::user("Sara", "S102", "1234"));

        let names: Vec<&str> =
            directory.iter().map(|user| user.identity.name.as_str()).collect();
        assert_eq!(names, vec!["Zara", "Sara"]);
    }
}
