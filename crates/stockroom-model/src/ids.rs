#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::EntityId;
use crate::error::ModelError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "u32", into = "u32")]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw identifier, rejecting zero.
            pub fn new(value: u32) -> Result<Self, ModelError> {
                if value == 0 {
                    return Err(ModelError::InvalidId(value.to_string()));
                }
                Ok(Self(value))
            }

            pub fn get(self) -> u32 {
                self.0
            }
        }

        impl EntityId for $name {
            const FIRST: Self = Self(1);

            fn successor(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl TryFrom<u32> for $name {
            type Error = ModelError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value: u32 = s
                    .trim()
                    .parse()
                    .map_err(|_| ModelError::InvalidId(s.to_string()))?;
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identifier of an inventory item.
    ItemId
);

record_id!(
    /// Identifier of an inventory category.
    CategoryId
);
