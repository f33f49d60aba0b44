//! Session state shared by every dashboard screen.

use std::time::Duration;

use stockroom_model::{Route, SessionUser};
use tracing::{debug, error, info, warn};

use crate::client::AuthTransport;
use crate::error::SessionError;

/// Public authentication screens that never trigger a session lookup.
pub const EXCLUDED_ROUTES: [&str; 4] = ["/login", "/signup", "/forgot-password", "/reset-password"];

/// Delay before the post-logout reload.
const RELOAD_DELAY: Duration = Duration::from_millis(300);

/// Whether `path` is one of the [`EXCLUDED_ROUTES`].
pub fn is_excluded_route(path: &str) -> bool {
    let path = path.trim();
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    EXCLUDED_ROUTES.contains(&path)
}

/// Where to go after logging out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutPlan {
    pub redirect: Route,
    /// The page reloads this long after navigating.
    pub reload_after: Duration,
}

/// Who is signed in and whether a lookup is still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<SessionUser>,
    loading: bool,
    last_error: Option<SessionError>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    /// A session that has not looked anything up yet.
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
            last_error: None,
        }
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Why the most recent lookup left the session signed out, if it failed.
    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    /// Look up the signed-in user after navigating to `path`.
    ///
    /// Excluded routes skip the request. Any failure leaves the session
    /// signed out and is kept in [`Self::last_error`]. `loading` is `false`
    /// afterwards in every case.
    pub fn refresh(&mut self, transport: &dyn AuthTransport, path: &str) {
        if is_excluded_route(path) {
            debug!(path, "session lookup skipped on public route");
            self.loading = false;
            return;
        }
        self.loading = true;
        self.last_error = None;
        self.user = match transport.current_user() {
            Ok(Some(user)) => {
                debug!(user_id = %user.id, "session active");
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                match &e {
                    SessionError::Status(code) => warn!(status = *code, "session lookup rejected"),
                    other => error!(error = %other, "session lookup failed"),
                }
                self.last_error = Some(e);
                None
            }
        };
        self.loading = false;
    }

    /// End the session. The local user is cleared even if the request fails.
    pub fn logout(&mut self, transport: &dyn AuthTransport) -> LogoutPlan {
        if let Err(e) = transport.logout() {
            error!(error = %e, "logout request failed");
        }
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "signed out");
        }
        LogoutPlan {
            redirect: Route::Login,
            reload_after: RELOAD_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::Result;

    struct FakeTransport {
        user: Option<SessionUser>,
        fail: bool,
        status: Option<u16>,
        calls: Cell<usize>,
    }

    impl FakeTransport {
        fn new(user: Option<SessionUser>, fail: bool) -> Self {
            Self {
                user,
                fail,
                status: None,
                calls: Cell::new(0),
            }
        }

        fn rejecting(code: u16) -> Self {
            Self {
                status: Some(code),
                ..Self::new(None, false)
            }
        }
    }

    impl AuthTransport for FakeTransport {
        fn current_user(&self) -> Result<Option<SessionUser>> {
            self.calls.set(self.calls.get() + 1);
            if let Some(code) = self.status {
                return Err(SessionError::Status(code));
            }
            if self.fail {
                return Err(SessionError::Network("connection refused".to_string()));
            }
            Ok(self.user.clone())
        }

        fn logout(&self) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(SessionError::Status(500));
            }
            Ok(())
        }
    }

    fn sara() -> SessionUser {
        SessionUser {
            id: "u1".to_string(),
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            company: None,
            photo: None,
            role: "admin".to_string(),
        }
    }

    #[test]
    fn excluded_route_makes_no_request() {
        let transport = FakeTransport::new(Some(sara()), false);
        let mut session = AuthSession::new();
        session.refresh(&transport, "/login");
        assert_eq!(transport.calls.get(), 0);
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn excluded_routes_ignore_trailing_slash() {
        assert!(is_excluded_route("/reset-password/"));
        assert!(!is_excluded_route("/dashboard"));
        assert!(!is_excluded_route("/"));
    }

    #[test]
    fn refresh_sets_user() {
        let transport = FakeTransport::new(Some(sara()), false);
        let mut session = AuthSession::new();
        session.refresh(&transport, "/dashboard/inventory");
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Sara"));
        assert!(!session.is_loading());
    }

    #[test]
    fn failure_clears_user() {
        let mut session = AuthSession::new();
        session.refresh(&FakeTransport::new(Some(sara()), false), "/dashboard");
        session.refresh(&FakeTransport::new(None, true), "/dashboard");
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert!(matches!(session.last_error(), Some(SessionError::Network(_))));
    }

    #[test]
    fn rejected_lookup_signs_out_and_keeps_the_status() {
        let mut session = AuthSession::new();
        session.refresh(&FakeTransport::new(Some(sara()), false), "/dashboard");
        assert!(session.is_authenticated());
        session.refresh(&FakeTransport::rejecting(401), "/dashboard/inventory");
        assert!(session.user().is_none());
        assert!(!session.is_loading());
        assert_eq!(session.last_error(), Some(&SessionError::Status(401)));
        assert_eq!(
            session.last_error().map(SessionError::user_message),
            Some("You are not signed in.")
        );

        session.refresh(&FakeTransport::new(Some(sara()), false), "/dashboard");
        assert!(session.last_error().is_none());
    }

    #[test]
    fn logout_clears_user_even_when_request_fails() {
        let mut session = AuthSession::new();
        session.refresh(&FakeTransport::new(Some(sara()), false), "/dashboard");
        let plan = session.logout(&FakeTransport::new(None, true));
        assert!(session.user().is_none());
        assert_eq!(plan.redirect, Route::Login);
        assert_eq!(plan.reload_after, Duration::from_millis(300));
    }
}
