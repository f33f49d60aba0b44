//! Client-side route table.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Dashboard routes. Every `/dashboard*` route renders inside the shared
/// layout; `/` redirects to `/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Dashboard,
    Inventory,
    Categories,
    Reports,
    Activity,
    Users,
    Alerts,
    Settings,
    Support,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Root,
        Route::Login,
        Route::Dashboard,
        Route::Inventory,
        Route::Categories,
        Route::Reports,
        Route::Activity,
        Route::Users,
        Route::Alerts,
        Route::Settings,
        Route::Support,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Inventory => "/dashboard/inventory",
            Self::Categories => "/dashboard/categories",
            Self::Reports => "/dashboard/reports",
            Self::Activity => "/dashboard/activity",
            Self::Users => "/dashboard/users",
            Self::Alerts => "/dashboard/alerts",
            Self::Settings => "/dashboard/settings",
            Self::Support => "/dashboard/support",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Root => "Home",
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Inventory => "Inventory Items",
            Self::Categories => "Categories",
            Self::Reports => "Reports",
            Self::Activity => "Activity Feed",
            Self::Users => "User Management",
            Self::Alerts => "Alerts Center",
            Self::Settings => "Settings",
            Self::Support => "Support",
        }
    }

    /// Whether the page renders inside the dashboard layout.
    pub fn uses_layout(&self) -> bool {
        !matches!(self, Self::Root | Self::Login)
    }

    /// Target of a redirect, if this route only redirects.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Root => Some(Self::Dashboard),
            _ => None,
        }
    }
}

impl FromStr for Route {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path)
            .ok_or_else(|| ModelError::UnknownRoute(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_back() {
        for route in Route::ALL {
            assert_eq!(route.path().parse::<Route>().unwrap(), route);
        }
        assert_eq!("/dashboard/users/".parse::<Route>().unwrap(), Route::Users);
        assert!("/signup".parse::<Route>().is_err());
    }

    #[test]
    fn root_redirects_to_dashboard() {
        assert_eq!(Route::Root.redirect(), Some(Route::Dashboard));
        assert!(Route::Inventory.uses_layout());
        assert!(!Route::Login.uses_layout());
    }
}
