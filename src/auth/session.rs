use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::SessionConfig;
use crate::error::ApiError;

/// Session key under which the authenticated user's id is stored.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Cookie-referenced, in-process session store. The cookie carries only an
/// opaque id; `user_id` lives server-side and expires on inactivity.
pub fn session_layer(config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(config.cookie_name.clone())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(config.ttl_minutes)))
}

/// Request-scoped authenticated identity, read from the session. Handlers
/// that require authentication take this extractor; an anonymous request is
/// rejected with the fixed 401 body before the handler runs.
#[derive(Debug)]
pub struct AuthSession(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthorized)?;

        let user_id = session
            .get::<i64>(SESSION_USER_ID_KEY)
            .await
            .map_err(|_| ApiError::Unauthorized)?
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthSession(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_builds_from_config() {
        let _ = session_layer(&SessionConfig {
            cookie_name: "session".into(),
            ttl_minutes: 30,
        });
    }
}
