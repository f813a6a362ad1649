//! Strongly-typed ID wrappers for ledger entities
//!
//! Accounts, transactions and budget categories each get their own newtype so
//! a transaction's account reference can never be confused with its budget
//! reference. Series in a trend report are keyed by `AccountId`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short display form, e.g. `acc-1a2b3c4d`
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.simple().to_string()[..8])
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

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(AccountId, "acc-");
define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");

impl AccountId {
    /// Check whether a user-supplied string names this ID, either in full or
    /// by its short `acc-xxxxxxxx` prefix form
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        input.eq_ignore_ascii_case(&self.to_string()) || input.eq_ignore_ascii_case(&self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let id = AccountId::new();
        let short = id.short();
        assert!(short.starts_with("acc-"));
        assert_eq!(short.len(), 12);
        assert!(id.matches(&short));
        assert!(id.matches(&id.to_string()));
    }

    #[test]
    fn test_parse_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: AccountId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);

        let budget: BudgetId = format!("bud-{}", uuid_str).parse().unwrap();
        assert_eq!(budget.as_uuid(), id.as_uuid());
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = TransactionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!("not-an-id".parse::<AccountId>().is_err());
    }
}
