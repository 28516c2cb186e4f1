//! Viewer resolution from the session cookie.
//!
//! Provides a thin wrapper around Actix sessions so handlers only ask "who is
//! viewing?" and never see cookie or deserialisation failures.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::UserId;

/// Session key under which the login flow stores the viewer id.
pub const USER_ID_KEY: &str = "user_id";

/// Newtype wrapper that exposes viewer lookups.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// The signed-in viewer, or `None` for anonymous visitors.
    ///
    /// Unreadable or malformed session values are treated as anonymous.
    pub fn viewer(&self) -> Option<UserId> {
        let raw = match self.0.get::<String>(USER_ID_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(%error, "unreadable viewer id in session; treating as anonymous");
                return None;
            }
        };
        match UserId::new(raw) {
            Ok(id) => Some(id),
            Err(error) => {
                warn!(%error, "invalid viewer id in session; treating as anonymous");
                None
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
