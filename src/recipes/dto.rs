use serde::{Deserialize, Serialize};

use crate::auth::dto::UserSummary;
use crate::auth::repo_types::User;
use crate::recipes::repo_types::Recipe;

/// Creation body. Required fields are optional here so a missing one maps to
/// the fixed 422 body instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub title: Option<String>,
    pub instructions: Option<String>,
    pub minutes_to_complete: Option<i32>,
}

/// Recipe with its owner embedded; the owner carries no recipe list of its
/// own.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i32>,
    pub user_id: Option<i64>,
    pub user: Option<UserSummary>,
}

impl RecipeResponse {
    pub fn with_owner(recipe: Recipe, owner: Option<&User>) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user_id: recipe.user_id,
            user: owner.map(UserSummary::from),
        }
    }
}

/// Recipe as embedded in a user response: no `user` field.
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i32>,
    pub user_id: Option<i64>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            instructions: recipe.instructions,
            minutes_to_complete: recipe.minutes_to_complete,
            user_id: recipe.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    fn sample_owner() -> User {
        User {
            id: 4,
            username: "baker".into(),
            password_hash: None,
            image_url: None,
            bio: Some("sourdough person".into()),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    fn sample_recipe() -> Recipe {
        Recipe {
            id: 11,
            title: "Country loaf".into(),
            instructions: "Mix, rest, fold every half hour, shape, proof overnight, then bake."
                .into(),
            minutes_to_complete: Some(90),
            user_id: Some(4),
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn embedded_owner_never_contains_a_recipes_array() {
        let owner = sample_owner();
        let value = serde_json::to_value(RecipeResponse::with_owner(sample_recipe(), Some(&owner)))
            .expect("serialize");
        assert_eq!(value["user"]["username"], "baker");
        assert!(value["user"].get("recipes").is_none());
        assert!(value["user"].get("password_hash").is_none());
    }

    #[test]
    fn response_keeps_all_recipe_attributes() {
        let value = serde_json::to_value(RecipeResponse::with_owner(sample_recipe(), None))
            .expect("serialize");
        assert_eq!(value["id"], 11);
        assert_eq!(value["minutes_to_complete"], 90);
        assert_eq!(value["user_id"], 4);
        assert_eq!(value["user"], serde_json::Value::Null);
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let parsed: CreateRecipeRequest =
            serde_json::from_str(r#"{"title":"Toast"}"#).expect("parse");
        assert_eq!(parsed.title.as_deref(), Some("Toast"));
        assert!(parsed.instructions.is_none());
        assert!(parsed.minutes_to_complete.is_none());
    }
}
