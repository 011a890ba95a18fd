//! Strongly-typed identifier value objects.
//!
//! Identifiers are database serials, so they wrap `i64` rather than UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generates a serial-backed identifier newtype.
macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database identifier.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

serial_id!(
    /// Identifier of a task.
    TaskId
);

serial_id!(
    /// Identifier of a user who can be responsible for tasks.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_parses_from_string() {
        let id: TaskId = "42".parse().unwrap();
        assert_eq!(id, TaskId::new(42));
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn task_id_rejects_garbage() {
        assert!("abc".parse::<TaskId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(TaskId::new(7).to_string(), "7");
        assert_eq!(UserId::new(13).to_string(), "13");
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&TaskId::new(5)).unwrap();
        assert_eq!(json, "5");
        let id: UserId = serde_json::from_str("9").unwrap();
        assert_eq!(id, UserId::new(9));
    }
}
