//! Alerts shown in the alerts center.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Alert type label for low-stock alerts.
pub const KIND_LOW_STOCK: &str = "Low Stock";
/// Alert type label for expired batches.
pub const KIND_EXPIRED: &str = "Expired";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Resolved => "Resolved",
        }
    }
}

impl FromStr for AlertStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ModelError::UnknownAlertStatus(s.to_string())),
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge style used to render a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

/// A system alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub message: String,
    /// Free-form type label ("Low Stock", "Expired", "Info", ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AlertStatus,
    pub date: NaiveDate,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }

    pub fn kind_variant(&self) -> BadgeVariant {
        match self.kind.as_str() {
            KIND_LOW_STOCK => BadgeVariant::Secondary,
            KIND_EXPIRED => BadgeVariant::Destructive,
            _ => BadgeVariant::Outline,
        }
    }

    pub fn status_variant(&self) -> BadgeVariant {
        if self.is_active() {
            BadgeVariant::Default
        } else {
            BadgeVariant::Secondary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(kind: &str, status: AlertStatus) -> Alert {
        Alert {
            id: 1,
            message: "Low stock: Cement bags below threshold".to_string(),
            kind: kind.to_string(),
            status,
            date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        }
    }

    #[test]
    fn badge_variants() {
        assert_eq!(alert("Low Stock", AlertStatus::Active).kind_variant(), BadgeVariant::Secondary);
        assert_eq!(alert("Expired", AlertStatus::Active).kind_variant(), BadgeVariant::Destructive);
        assert_eq!(alert("Info", AlertStatus::Resolved).kind_variant(), BadgeVariant::Outline);
        assert_eq!(alert("Info", AlertStatus::Resolved).status_variant(), BadgeVariant::Secondary);
        assert_eq!(alert("Info", AlertStatus::Active).status_variant(), BadgeVariant::Default);
    }

    #[test]
    fn type_field_is_renamed() {
        let json = r#"{"id":2,"message":"Item expired","type":"Expired","status":"active","date":"2025-10-31"}"#;
        let parsed: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, "Expired");
        assert!(parsed.is_active());
    }
}
