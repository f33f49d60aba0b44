//! Alerts center: searchable alert table with a resolve action.

use chrono::NaiveDate;
use stockroom_model::{Alert, AlertStatus};
use tracing::{debug, info};

use crate::notify::{Notification, Notifier, emit};

/// Alerts plus the current search term.
#[derive(Debug, Clone, Default)]
pub struct AlertCenter {
    alerts: Vec<Alert>,
    search: String,
}

impl AlertCenter {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self {
            alerts,
            search: String::new(),
        }
    }

    /// Center pre-loaded with [`sample_alerts`].
    pub fn with_samples() -> Self {
        Self::new(sample_alerts())
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts whose message or type contains the search term.
    pub fn visible(&self) -> Vec<&Alert> {
        let needle = self.search.to_lowercase();
        self.alerts
            .iter()
            .filter(|alert| {
                alert.message.to_lowercase().contains(&needle)
                    || alert.kind.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|alert| alert.is_active()).count()
    }

    /// Mark an active alert resolved.
    ///
    /// Returns `false` without notifying when the alert is unknown or
    /// already resolved.
    pub fn resolve(&mut self, id: u32, notifier: &mut dyn Notifier) -> bool {
        let Some(alert) = self
            .alerts
            .iter_mut()
            .find(|alert| alert.id == id && alert.is_active())
        else {
            debug!(alert_id = id, "nothing to resolve");
            return false;
        };
        alert.status = AlertStatus::Resolved;
        info!(alert_id = id, "alert resolved");
        emit(notifier, Notification::success("Alert resolved successfully!"));
        true
    }
}

/// Built-in alerts shown until an alert feed exists.
pub fn sample_alerts() -> Vec<Alert> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        Alert {
            id: 1,
            message: "Low stock: Cement bags below threshold".to_string(),
            kind: "Low Stock".to_string(),
            status: AlertStatus::Active,
            date: date(2025, 11, 1),
        },
        Alert {
            id: 2,
            message: "Item expired: Paint - Batch #203".to_string(),
            kind: "Expired".to_string(),
            status: AlertStatus::Active,
            date: date(2025, 10, 31),
        },
        Alert {
            id: 3,
            message: "New shipment received: Steel rods".to_string(),
            kind: "Info".to_string(),
            status: AlertStatus::Resolved,
            date: date(2025, 10, 30),
        },
    ]
}
