//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Crafting jobs are the only server-generated entities in the Armory, but
//! the newtype pattern keeps job identifiers from being confused with the
//! recipe and item string IDs that flow through the same call sites. Job
//! IDs use UUID v7 (time-ordered) so a queue sorted by ID is also sorted
//! by creation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a crafting job in a station queue.
    JobId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_unique() {
        let a = JobId::new();
        let b = JobId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn job_id_roundtrip_serde() {
        let original = JobId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<JobId, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(original));
    }

    #[test]
    fn job_id_display_matches_uuid() {
        let id = JobId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
