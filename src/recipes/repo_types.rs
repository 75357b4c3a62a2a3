use sqlx::FromRow;
use time::OffsetDateTime;

use crate::error::ValidationError;

pub const MIN_INSTRUCTIONS_CHARS: usize = 50;

/// Recipe row. A recipe may outlive its owner, so `user_id` is nullable.
#[derive(Debug, Clone, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub minutes_to_complete: Option<i32>,
    pub user_id: Option<i64>,
    pub created_at: OffsetDateTime,
}

/// Instructions must carry at least 50 characters, counted as characters
/// rather than bytes.
pub fn validate_instructions(instructions: &str) -> Result<(), ValidationError> {
    if instructions.chars().count() < MIN_INSTRUCTIONS_CHARS {
        return Err(ValidationError::InstructionsTooShort {
            minimum: MIN_INSTRUCTIONS_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forty_nine_characters_are_rejected() {
        let short = "x".repeat(MIN_INSTRUCTIONS_CHARS - 1);
        assert_eq!(
            validate_instructions(&short),
            Err(ValidationError::InstructionsTooShort {
                minimum: MIN_INSTRUCTIONS_CHARS
            })
        );
    }

    #[test]
    fn exactly_fifty_characters_are_accepted() {
        let exact = "x".repeat(MIN_INSTRUCTIONS_CHARS);
        assert!(validate_instructions(&exact).is_ok());
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 50 two-byte characters: valid even though a byte count would differ.
        let multibyte = "é".repeat(MIN_INSTRUCTIONS_CHARS);
        assert!(validate_instructions(&multibyte).is_ok());

        let short_multibyte = "é".repeat(MIN_INSTRUCTIONS_CHARS - 1);
        assert!(validate_instructions(&short_multibyte).is_err());
    }
}
