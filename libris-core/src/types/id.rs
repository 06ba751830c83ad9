//! Identifier newtypes
//!
//! Both identifiers are caller-assigned integers. No range or uniqueness checks are
//! applied: zero and negative values are as valid as any other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Get the raw integer value
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
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
                s.trim().parse().map(Self)
            }
        }
    };
}

integer_id!(
    /// Identifier of a book in the catalog
    BookId
);

integer_id!(
    /// Identifier of a library user
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(" 42\n".parse::<BookId>().unwrap(), BookId(42));
        assert_eq!("-7".parse::<UserId>().unwrap(), UserId(-7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("abc".parse::<BookId>().is_err());
        assert!("".parse::<UserId>().is_err());
        assert!("1.5".parse::<BookId>().is_err());
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(BookId(1001).to_string(), "1001");
        assert_eq!(UserId(0).to_string(), "0");
    }

    #[test]
    fn test_serializes_transparently() {
        assert_eq!(serde_json::to_string(&BookId(5)).unwrap(), "5");
        let user: UserId = serde_json::from_str("300").unwrap();
        assert_eq!(user, UserId(300));
    }
}
