use sqlx::PgPool;

use crate::recipes::repo_types::Recipe;

impl Recipe {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, instructions, minutes_to_complete, user_id, created_at
            FROM recipes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        title: &str,
        instructions: &str,
        minutes_to_complete: Option<i32>,
    ) -> anyhow::Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, instructions, minutes_to_complete, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, instructions, minutes_to_complete, user_id, created_at
            "#,
        )
        .bind(title)
        .bind(instructions)
        .bind(minutes_to_complete)
        .bind(user_id)
        .fetch_one(db)
        .await?;
        Ok(recipe)
    }
}
