use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tower_sessions::Session;
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, SignupRequest, UserResponse},
        password::PasswordHash,
        repo_types::{validate_username, User},
        session::SESSION_USER_ID_KEY,
    },
    error::ApiError,
    recipes::repo_types::Recipe,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/check_session", get(check_session))
        .route("/login", post(login))
        .route("/logout", delete(logout))
}

#[instrument(skip(state, session, payload))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        warn!("signup missing username or password");
        return Err(ApiError::InvalidUserData);
    };

    if let Err(e) = validate_username(&username) {
        warn!(error = %e, "signup rejected");
        return Err(ApiError::InvalidUserData);
    }

    // Pre-check for a clear 422; the unique index still decides under races.
    if User::find_by_username(&state.db, &username)
        .await
        .map_err(internal)?
        .is_some()
    {
        warn!(%username, "username already taken");
        return Err(ApiError::InvalidUserData);
    }

    let hash = PasswordHash::from_plain(&password).map_err(internal)?;

    let user = match User::create(
        &state.db,
        &username,
        hash,
        payload.image_url.as_deref(),
        payload.bio.as_deref(),
    )
    .await
    {
        Ok(user) => user,
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
            warn!(%username, "username taken concurrently");
            return Err(ApiError::InvalidUserData);
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(internal(e));
        }
    };

    session
        .insert(SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(internal)?;

    info!(user_id = user.id, username = %user.username, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_user(user, Vec::new())),
    ))
}

#[instrument(skip(state, session))]
pub async fn check_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id: i64 = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(internal)?
        .ok_or(ApiError::Unauthorized)?;

    let user = User::find_by_id(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            warn!(user_id, "session references a missing user");
            ApiError::Unauthorized
        })?;

    let recipes = Recipe::list_by_user(&state.db, user.id)
        .await
        .map_err(internal)?;
    Ok(Json(UserResponse::from_user(user, recipes)))
}

#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = payload.username.unwrap_or_default();
    let candidate = payload.password.unwrap_or_default();

    // Unknown user and wrong password produce the same response.
    let Some(user) = User::find_by_username(&state.db, &username)
        .await
        .map_err(internal)?
    else {
        warn!(%username, "login with unknown username");
        return Err(ApiError::InvalidCredentials);
    };

    if !user.authenticate(&candidate) {
        warn!(user_id = user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    session
        .insert(SESSION_USER_ID_KEY, user.id)
        .await
        .map_err(internal)?;

    let recipes = Recipe::list_by_user(&state.db, user.id)
        .await
        .map_err(internal)?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(UserResponse::from_user(user, recipes)))
}

#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode, ApiError> {
    let current: Option<i64> = session
        .get(SESSION_USER_ID_KEY)
        .await
        .map_err(internal)?;

    if current.is_none() {
        return Err(ApiError::Unauthorized);
    }

    session
        .remove::<i64>(SESSION_USER_ID_KEY)
        .await
        .map_err(internal)?;

    info!("user logged out");
    Ok(StatusCode::NO_CONTENT)
}

fn internal<E: Into<anyhow::Error>>(e: E) -> ApiError {
    ApiError::Internal(e.into())
}
