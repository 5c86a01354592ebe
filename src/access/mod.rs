//! Access control: identities, credentials, and the user directory
//!
//! This module contains everything about who may request access:
//!
//! - **Identity**: name/id record shared by admins and users
//! - **Pin**: the stored PIN secret and its equality check
//! - **Credential / Principal**: role-specific capabilities and operations
//! - **UserDirectory**: ordered registry of registered users

pub mod directory;
pub mod identity;
pub mod principal;

// Re-export all public types for convenience
pub use directory::UserDirectory;
pub use identity::{Identity, Pin};
pub use principal::{Credential, Principal};
