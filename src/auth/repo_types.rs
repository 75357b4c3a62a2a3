use sqlx::FromRow;
use time::OffsetDateTime;

use crate::auth::password::PasswordHash;
use crate::error::ValidationError;

/// User row. External representations go through the allow-list DTOs in
/// `dto`; the hash column has no serialized form at all.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: Option<PasswordHash>,
    pub image_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: OffsetDateTime,
}

impl User {
    /// True iff a hash is present and `candidate` matches it. Never errors.
    pub fn authenticate(&self, candidate: &str) -> bool {
        match &self.password_hash {
            Some(hash) => hash.verify(candidate),
            None => false,
        }
    }
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::BlankUsername);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_hash(hash: Option<PasswordHash>) -> User {
        User {
            id: 1,
            username: "chef".into(),
            password_hash: hash,
            image_url: None,
            bio: None,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn validate_username_rejects_empty_and_whitespace() {
        assert_eq!(validate_username(""), Err(ValidationError::BlankUsername));
        assert_eq!(
            validate_username("   \t"),
            Err(ValidationError::BlankUsername)
        );
    }

    #[test]
    fn validate_username_accepts_non_blank() {
        assert!(validate_username("chef").is_ok());
        assert!(validate_username("  chef  ").is_ok());
    }

    #[test]
    fn authenticate_is_false_without_a_hash() {
        let user = user_with_hash(None);
        assert!(!user.authenticate("anything"));
        assert!(!user.authenticate(""));
    }

    #[test]
    fn authenticate_matches_only_the_set_password() {
        let hash = PasswordHash::from_plain("s3cret-pass").expect("hash");
        let user = user_with_hash(Some(hash));
        assert!(user.authenticate("s3cret-pass"));
        assert!(!user.authenticate("s3cret-pass "));
    }
}
