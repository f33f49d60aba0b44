//! Session lookup for the Stockroom dashboard.
//!
//! The dashboard asks the backend who is signed in whenever the route
//! changes, except on the public authentication screens. Failures never
//! surface to the user: they degrade to "not signed in" and are logged.
//!
//! # Example
//!
//! ```no_run
//! use stockroom_session::{AuthSession, HttpAuthClient, SessionSettings};
//!
//! let settings = SessionSettings::load();
//! let client = HttpAuthClient::new(&settings)?;
//! let mut session = AuthSession::new();
//! session.refresh(&client, "/dashboard");
//! if let Some(user) = session.user() {
//!     println!("signed in as {}", user.name);
//! }
//! # Ok::<(), stockroom_session::SessionError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use client::{AuthTransport, HttpAuthClient};
pub use config::{API_URL_ENV, DEFAULT_API_URL, SessionSettings};
pub use error::{Result, SessionError};
pub use session::{AuthSession, EXCLUDED_ROUTES, LogoutPlan, is_excluded_route};
