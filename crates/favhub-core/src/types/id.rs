//! Newtype wrappers around [`uuid::Uuid`] for runtime identifiers.
//!
//! Node identifiers are generated when a tree is loaded and are never
//! written to storage; the persisted schema stays positional.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Runtime identifier of a folder or link node.
    NodeId
);

define_id!(
    /// Unique identifier for a domain event.
    EventId
);

define_id!(
    /// Unique identifier for a transient status notice.
    NoticeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_new() {
        let id1 = NodeId::new();
        let id2 = NodeId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_node_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: NodeId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id, NodeId::from(uuid));
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_node_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<NodeId>().is_err());
    }
}
