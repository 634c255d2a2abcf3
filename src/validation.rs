//! Length field validation.
//!
//! The length arrives as free text from a single-line input and must be a
//! whole number between [`MIN_LENGTH`] and [`MAX_LENGTH`] inclusive before a
//! password is generated.

use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

use crate::charset::CharacterClasses;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Length is required")]
    Required,

    #[error("Length must be a whole number")]
    NotANumber,

    #[error("Should be min of 4 character")]
    TooShort,

    #[error("Should be max of 16 character")]
    TooLong,
}

/// Parses and range-checks the raw length text.
pub fn validate_length(input: &str) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }

    // Whole numbers too large for i64 are still out of range, not malformed
    let value: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::TooLong,
        IntErrorKind::NegOverflow => ValidationError::TooShort,
        _ => ValidationError::NotANumber,
    })?;
    if value < MIN_LENGTH as i64 {
        return Err(ValidationError::TooShort);
    }
    if value > MAX_LENGTH as i64 {
        return Err(ValidationError::TooLong);
    }
    Ok(value as usize)
}

/// A validated (length, classes) pair driving one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: CharacterClasses,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: CharacterClasses) -> Result<Self, ValidationError> {
        if length < MIN_LENGTH {
            return Err(ValidationError::TooShort);
        }
        if length > MAX_LENGTH {
            return Err(ValidationError::TooLong);
        }
        Ok(Self { length, classes })
    }

    /// Builds a request straight from the form's text field.
    pub fn from_input(input: &str, classes: CharacterClasses) -> Result<Self, ValidationError> {
        let length = validate_length(input)?;
        Self::new(length, classes)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }
}
