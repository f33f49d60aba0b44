//! User directory filtering.

use chrono::{TimeZone, Utc};
use stockroom_model::{DirectoryUser, Filter, UserRole, UserStatus};

/// Search and select-box state of the user directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    /// Matched against name and email, case-insensitively.
    pub search: String,
    pub status: Filter<UserStatus>,
    pub role: Filter<UserRole>,
}

impl UserQuery {
    pub fn matches(&self, user: &DirectoryUser) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = user.name.to_lowercase().contains(&needle)
            || user.email.to_lowercase().contains(&needle);
        matches_search && self.status.matches(&user.status) && self.role.matches(&user.role)
    }

    /// Users passing every filter, in directory order.
    pub fn apply<'a>(&self, users: &'a [DirectoryUser]) -> Vec<&'a DirectoryUser> {
        users.iter().filter(|user| self.matches(user)).collect()
    }
}

/// Built-in directory shown until a user backend exists.
pub fn sample_users() -> Vec<DirectoryUser> {
    let at = |y, m, d, h| {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .unwrap_or_default()
    };
    vec![
        DirectoryUser {
            id: "1".to_string(),
            name: "Nadia Karimi".to_string(),
            email: "nadia@stockroom.example".to_string(),
            role: UserRole::Superadmin,
            status: UserStatus::Active,
            last_active: at(2025, 10, 28, 14),
            created_at: at(2023, 6, 10, 0),
        },
        DirectoryUser {
            id: "2".to_string(),
            name: "Omar Haddad".to_string(),
            email: "omar@stockroom.example".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_active: at(2025, 10, 25, 12),
            created_at: at(2023, 7, 5, 0),
        },
        DirectoryUser {
            id: "3".to_string(),
            name: "Lina Mansour".to_string(),
            email: "lina@stockroom.example".to_string(),
            role: UserRole::User,
            status: UserStatus::Inactive,
            last_active: at(2025, 9, 20, 9),
            created_at: at(2024, 3, 2, 0),
        },
        DirectoryUser {
            id: "4".to_string(),
            name: "Sami Benali".to_string(),
            email: "sami@stockroom.example".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
            last_active: at(2025, 10, 26, 17),
            created_at: at(2024, 5, 14, 0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(users: &[&DirectoryUser]) -> Vec<String> {
        users.iter().map(|user| user.id.clone()).collect()
    }

    #[test]
    fn default_query_returns_everyone() {
        let users = sample_users();
        assert_eq!(UserQuery::default().apply(&users).len(), users.len());
    }

    #[test]
    fn search_covers_email() {
        let users = sample_users();
        let query = UserQuery {
            search: "OMAR@".to_string(),
            ..UserQuery::default()
        };
        assert_eq!(ids(&query.apply(&users)), ["2"]);
    }

    #[test]
    fn status_and_role_filters_combine() {
        let users = sample_users();
        let query = UserQuery {
            status: Filter::Only(UserStatus::Active),
            role: Filter::Only(UserRole::User),
            ..UserQuery::default()
        };
        assert_eq!(ids(&query.apply(&users)), ["4"]);
    }
}
