//! View-state vocabulary shared by the list screens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::CategoryId;

/// Sort order for the inventory table. All orders are ascending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Locale-aware name order.
    #[default]
    Name,
    Quantity,
    Price,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Quantity => "quantity",
            Self::Price => "price",
        }
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "quantity" => Ok(Self::Quantity),
            "price" => Ok(Self::Price),
            _ => Err(ModelError::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A select-box filter: either everything or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> FromStr for Filter<T>
where
    T: FromStr<Err = ModelError>,
{
    type Err = ModelError;

    /// `"all"` (any case) selects everything; anything else is parsed as `T`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Inventory category filter.
pub type CategoryFilter = Filter<CategoryId>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRole;

    #[test]
    fn sort_key_round_trips_through_display() {
        for key in [SortKey::Name, SortKey::Quantity, SortKey::Price] {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert!("stock".parse::<SortKey>().is_err());
    }

    #[test]
    fn category_filter_parses_all_or_id() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), Filter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), Filter::All);
        let only: CategoryFilter = "3".parse().unwrap();
        assert!(only.matches(&CategoryId::new(3).unwrap()));
        assert!(!only.matches(&CategoryId::new(4).unwrap()));
        assert!("zero".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn role_filter() {
        let filter: Filter<UserRole> = "admin".parse().unwrap();
        assert!(filter.matches(&UserRole::Admin));
        assert!(!filter.matches(&UserRole::User));
        assert!(Filter::<UserRole>::All.matches(&UserRole::User));
    }
}
