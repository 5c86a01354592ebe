//! Identifier types for the door lock simulator
//!
//! This module contains the string-backed person identifier used for admins
//! and users, and the UUID-based identifier attached to audit events.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Identifier for a person (admin or user)
///
/// Person ids are short operator-assigned strings such as `S001` or `Z101`.
/// They are not validated for uniqueness; the directory permits duplicates
/// and lookup returns the first match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    /// Create a person id from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Unique identifier for an audit event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Create a new random event ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EVT_{}", self.0.simple())
    }
}

impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("EVT_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("EVT_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(EventId(uuid))
        } else {
            // Fallback: try to parse as raw UUID for backward compatibility
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(EventId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_display_and_accessors() {
        let id = PersonId::new("S001");
        assert_eq!(id.as_str(), "S001");
        assert_eq!(id.to_string(), "S001");
        assert_eq!(id, PersonId::from("S001"));
    }

    #[test]
    fn test_person_id_serialization_is_transparent() {
        let id = PersonId::new("Z101");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Z101\"");

        let back: PersonId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_event_id_uniqueness() {
        let a = EventId::new();
        let b = EventId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_event_id_display_prefix() {
        let id = EventId::new();
        assert!(id.to_string().starts_with("EVT_"));
    }

    #[test]
    fn test_event_id_serialization_round_trip() {
        let id = EventId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("EVT_"));

        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_event_id_deserialization_from_raw_uuid() {
        let uuid = Uuid::new_v4();
        let json = format!("\"{}\"", uuid);
        let id: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(id.0, uuid);
    }
}
