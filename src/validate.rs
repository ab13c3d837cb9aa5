use crate::config::GenerationOptions;
use crate::error::{Result, StellarIdError};
use crate::transform::utf16_len;

pub const MAX_INPUT_LEN: usize = 1000;
pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;
pub const MAX_PREFIX_CHARS: usize = 20;
pub const MAX_SALT_LEN: usize = 100;

/// Checks the raw input string.
///
/// # Errors
///
/// Returns `InvalidInput` if the input is empty, only whitespace, or longer
/// than 1000 UTF-16 code units.
pub fn validate_input(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(StellarIdError::input("must not be empty"));
    }
    if input.trim().is_empty() {
        return Err(StellarIdError::input("must not be only whitespace"));
    }
    let len = utf16_len(input);
    if len > MAX_INPUT_LEN {
        return Err(StellarIdError::input(format!(
            "must be at most {MAX_INPUT_LEN} UTF-16 units, got {len}"
        )));
    }
    Ok(())
}

fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Checks a prefix against `^[A-Za-z0-9_-]+$` and the 20 character limit.
///
/// # Errors
///
/// Returns `InvalidOptions` with field `prefix`.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() || !prefix.chars().all(is_prefix_char) {
        return Err(StellarIdError::option(
            "prefix",
            format!("'{prefix}' must match [A-Za-z0-9_-]+"),
        ));
    }
    if prefix.len() > MAX_PREFIX_CHARS {
        return Err(StellarIdError::option(
            "prefix",
            format!("must be at most {MAX_PREFIX_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Checks every option. Algorithm and case are already typed, so only the
/// free-form fields need checking here.
///
/// # Errors
///
/// Returns `InvalidOptions` naming the first offending field.
pub fn validate_options(options: &GenerationOptions) -> Result<()> {
    if let Some(length) = options.length {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(StellarIdError::option(
                "length",
                format!("must be between {MIN_LENGTH} and {MAX_LENGTH}, got {length}"),
            ));
        }
    }

    validate_prefix(&options.prefix)?;

    if let Some(names) = &options.custom_star_names {
        if names.is_empty() {
            return Err(StellarIdError::option(
                "custom_star_names",
                "must contain at least one name",
            ));
        }
    }

    if let Some(salt) = &options.salt {
        if utf16_len(salt) > MAX_SALT_LEN {
            return Err(StellarIdError::option(
                "salt",
                format!("must be at most {MAX_SALT_LEN} UTF-16 units"),
            ));
        }
    }

    Ok(())
}
