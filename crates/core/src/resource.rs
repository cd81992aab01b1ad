//! Resource labels and the operations every resource exposes.
//!
//! Each REST resource (users, characters, scenes) is described by a
//! [`Labels`] value. The controller uses it to build the client-facing
//! messages for not-found, duplicate and generic failure responses so the
//! wording stays consistent across resources.

use std::fmt;

/// The five operations every resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Human-readable names used in a resource's messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Capitalized singular, e.g. `"Character"`.
    pub entity: &'static str,
    /// Lowercase plural, e.g. `"characters"`.
    pub plural: &'static str,
}

impl Labels {
    /// Message returned with a 500 when `op` fails for an unclassified reason.
    pub fn failure_message(&self, op: Operation) -> String {
        let singular = self.entity.to_lowercase();
        match op {
            Operation::List => format!("Error fetching {}", self.plural),
            Operation::Read => format!("Error fetching {singular}"),
            Operation::Create => format!("Error creating {singular}"),
            Operation::Update => format!("Error updating {singular}"),
            Operation::Delete => format!("Error deleting {singular}"),
        }
    }
}
