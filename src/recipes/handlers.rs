use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{repo_types::User, session::AuthSession},
    error::ApiError,
    recipes::{
        dto::{CreateRecipeRequest, RecipeResponse},
        repo_types::{validate_instructions, Recipe},
    },
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new().route("/recipes", get(list_recipes).post(create_recipe))
}

#[instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    AuthSession(user_id): AuthSession,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            warn!(user_id, "session references a missing user");
            ApiError::Unauthorized
        })?;

    let recipes = Recipe::list_by_user(&state.db, user_id)
        .await
        .map_err(internal)?;

    let items = recipes
        .into_iter()
        .map(|recipe| RecipeResponse::with_owner(recipe, Some(&user)))
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    AuthSession(user_id): AuthSession,
    Json(payload): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let (Some(title), Some(instructions)) = (payload.title, payload.instructions) else {
        warn!("recipe creation missing title or instructions");
        return Err(ApiError::InvalidRecipeData);
    };

    if let Err(e) = validate_instructions(&instructions) {
        warn!(error = %e, "recipe creation rejected");
        return Err(ApiError::InvalidRecipeData);
    }

    let owner = User::find_by_id(&state.db, user_id)
        .await
        .map_err(internal)?
        .ok_or_else(|| {
            warn!(user_id, "session references a missing user");
            ApiError::Unauthorized
        })?;

    let recipe = Recipe::create(
        &state.db,
        user_id,
        &title,
        &instructions,
        payload.minutes_to_complete,
    )
    .await
    .map_err(internal)?;

    info!(recipe_id = recipe.id, user_id, "recipe created");
    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse::with_owner(recipe, Some(&owner))),
    ))
}

fn internal<E: Into<anyhow::Error>>(e: E) -> ApiError {
    ApiError::Internal(e.into())
}
