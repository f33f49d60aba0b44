//! HTTP client for the `/auth` endpoints.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE, USER_AGENT};
use serde::Deserialize;
use stockroom_model::SessionUser;
use tracing::debug;

use crate::config::SessionSettings;
use crate::error::{Result, SessionError};

const ME_PATH: &str = "auth/me";
const LOGOUT_PATH: &str = "auth/logout";

/// Backend operations the session needs.
pub trait AuthTransport {
    /// The signed-in user, or `None` when the backend reports no session.
    fn current_user(&self) -> Result<Option<SessionUser>>;

    /// End the backend session. The response body is ignored.
    fn logout(&self) -> Result<()>;
}

/// Response envelope of `GET /auth/me`.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<SessionUser>,
}

/// Blocking `reqwest` implementation of [`AuthTransport`].
pub struct HttpAuthClient {
    client: Client,
    settings: SessionSettings,
}

impl HttpAuthClient {
    pub fn new(settings: &SessionSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    fn get(&self, path: &str) -> Result<reqwest::blocking::Response> {
        let url = self.settings.endpoint(path);
        debug!(%url, "auth request");
        let mut request = self
            .client
            .get(&url)
            .header(USER_AGENT, concat!("stockroom/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json");
        if let Some(cookie) = &self.settings.cookie {
            request = request.header(COOKIE, cookie);
        }
        Ok(request.send()?)
    }
}

impl AuthTransport for HttpAuthClient {
    fn current_user(&self) -> Result<Option<SessionUser>> {
        let response = self.get(ME_PATH)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Status(status.as_u16()));
        }
        let body = response.text()?;
        let envelope: Envelope = serde_json::from_str(&body)?;
        if !envelope.success {
            debug!("backend reported no session");
            return Ok(None);
        }
        Ok(envelope.data)
    }

    fn logout(&self) -> Result<()> {
        let response = self.get(LOGOUT_PATH)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_without_data_is_accepted() {
        let envelope: Envelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_with_user() {
        let json = r#"{"success": true, "data": {"id": "u1", "name": "Sara", "email": "s@example.com", "role": "admin"}}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.unwrap().name, "Sara");
    }
}
