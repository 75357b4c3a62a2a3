use serde::{Deserialize, Serialize};

use crate::auth::repo_types::User;
use crate::recipes::dto::RecipeSummary;
use crate::recipes::repo_types::Recipe;

/// Signup body. Required fields are optional here so a missing one maps to
/// the fixed 422 body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Full user representation: every column except the hash, plus the owned
/// recipes with their `user` back-reference elided.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub recipes: Vec<RecipeSummary>,
}

impl UserResponse {
    pub fn from_user(user: User, recipes: Vec<Recipe>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            image_url: user.image_url,
            bio: user.bio,
            recipes: recipes.into_iter().map(RecipeSummary::from).collect(),
        }
    }
}

/// User as embedded in a recipe: no `recipes` list, which stops the mutual
/// expansion.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub image_url: Option<String>,
    pub bio: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            image_url: user.image_url.clone(),
            bio: user.bio.clone(),
        }
    }
}
