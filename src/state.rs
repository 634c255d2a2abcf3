//! Form state for the generator screen.
//!
//! The whole screen is one [`FormState`] value. Every user action maps to a
//! transition that consumes the current state and returns the next one, so the
//! UI layer never mutates individual fields.

use rand::Rng;
use zeroize::Zeroize;

use crate::charset::{CharacterClass, CharacterClasses};
use crate::password::{PasswordGenerator, SamplingBound, estimate_entropy};
use crate::validation::{GenerationRequest, ValidationError, validate_length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Raw text of the length field
    pub length_input: String,
    pub classes: CharacterClasses,
    pub password: String,
    pub is_pass_generated: bool,
    pub length_error: Option<ValidationError>,
    /// Set once the user edited the length field or attempted a submit
    pub touched: bool,
    /// Size of the alphabet `password` was drawn from; toggling classes
    /// afterwards does not change it
    pub generated_alphabet_len: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length_input: String::new(),
            classes: CharacterClasses::only(CharacterClass::Lowercase),
            password: String::new(),
            is_pass_generated: false,
            length_error: None,
            touched: false,
            generated_alphabet_len: 0,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores new length text and re-validates it.
    pub fn with_length_input(mut self, text: impl Into<String>) -> Self {
        self.length_input = text.into();
        self.touched = true;
        self.length_error = validate_length(&self.length_input).err();
        self
    }

    pub fn toggle_class(mut self, class: CharacterClass) -> Self {
        self.classes = self.classes.toggled(class);
        self
    }

    /// Validates the length and, if valid, generates a new password.
    ///
    /// A validation failure leaves any previous password in place. An empty
    /// class set is not treated as an error: the password comes out empty and
    /// the result card is still shown.
    pub fn submit<R: Rng>(mut self, bound: SamplingBound, rng: &mut R) -> Self {
        self.touched = true;
        let request = match GenerationRequest::from_input(&self.length_input, self.classes) {
            Ok(req) => req,
            Err(e) => {
                log::debug!("Generation blocked: {e}");
                self.length_error = Some(e);
                return self;
            }
        };
        self.length_error = None;

        if request.classes().is_empty() {
            log::warn!("No character classes enabled; generated password will be empty");
        }
        log::debug!(
            "Generating password: length={}, classes={}, bound={:?}",
            request.length(),
            request.classes().len(),
            bound
        );

        self.password.zeroize();
        self.password = PasswordGenerator::new(bound).generate(&request, rng);
        self.generated_alphabet_len = request.classes().alphabet().len();
        self.is_pass_generated = true;
        self
    }

    /// Returns the screen to its initial state.
    pub fn reset(mut self) -> Self {
        self.password.zeroize();
        self.length_input.zeroize();
        Self::default()
    }

    /// The error to display under the length field, if any.
    pub fn visible_error(&self) -> Option<&ValidationError> {
        if self.touched {
            self.length_error.as_ref()
        } else {
            None
        }
    }

    /// Entropy of the shown password, from the classes it was generated with.
    pub fn entropy_bits(&self) -> f64 {
        estimate_entropy(self.generated_alphabet_len, self.password.chars().count())
    }

    /// Generate is disabled while the length field holds an invalid value.
    pub fn can_submit(&self) -> bool {
        self.length_error.is_none()
    }
}

impl Drop for FormState {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert!(state.length_input.is_empty());
        assert!(state.classes.contains(CharacterClass::Lowercase));
        assert!(!state.classes.contains(CharacterClass::Uppercase));
        assert!(!state.classes.contains(CharacterClass::Digit));
        assert!(!state.classes.contains(CharacterClass::Symbol));
        assert!(state.password.is_empty());
        assert!(!state.is_pass_generated);
        assert!(state.visible_error().is_none());
        assert!(state.can_submit());
    }

    #[test]
    fn test_submit_generates() {
        let state = FormState::new()
            .with_length_input("12")
            .toggle_class(CharacterClass::Digit)
            .submit(SamplingBound::Exclusive, &mut rng());

        assert!(state.is_pass_generated);
        assert_eq!(state.password.len(), 12);
        assert!(state.password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert!(state.length_error.is_none());
    }

    #[test]
    fn test_invalid_length_blocks_generation() {
        for (input, expected) in [
            ("3", ValidationError::TooShort),
            ("17", ValidationError::TooLong),
            ("", ValidationError::Required),
        ] {
            let state = FormState::new()
                .with_length_input(input)
                .submit(SamplingBound::Exclusive, &mut rng());
            assert!(!state.is_pass_generated, "input {input:?} should not generate");
            assert!(state.password.is_empty());
            assert_eq!(state.visible_error(), Some(&expected));
            assert!(!state.can_submit());
        }
    }

    #[test]
    fn test_submit_without_touching_shows_required() {
        let state = FormState::new().submit(SamplingBound::Exclusive, &mut rng());
        assert_eq!(state.visible_error(), Some(&ValidationError::Required));
        assert!(!state.is_pass_generated);
    }

    #[test]
    fn test_failed_submit_keeps_previous_password() {
        let state = FormState::new()
            .with_length_input("8")
            .submit(SamplingBound::Exclusive, &mut rng());
        let previous = state.password.clone();

        let state = state
            .with_length_input("40")
            .submit(SamplingBound::Exclusive, &mut rng());
        assert_eq!(state.password, previous);
        assert!(state.is_pass_generated);
        assert_eq!(state.visible_error(), Some(&ValidationError::TooLong));
    }

    #[test]
    fn test_error_clears_when_input_fixed() {
        let state = FormState::new().with_length_input("2");
        assert!(!state.can_submit());
        let state = state.with_length_input("6");
        assert!(state.can_submit());
        assert!(state.visible_error().is_none());
    }

    #[test]
    fn test_empty_classes_still_report_success() {
        let state = FormState::new()
            .with_length_input("10")
            .toggle_class(CharacterClass::Lowercase)
            .submit(SamplingBound::Exclusive, &mut rng());
        assert!(state.classes.is_empty());
        assert!(state.is_pass_generated);
        assert_eq!(state.password, "");
    }

    #[test]
    fn test_entropy_follows_generated_classes_not_checkboxes() {
        let state = FormState::new()
            .with_length_input("16")
            .submit(SamplingBound::Exclusive, &mut rng());
        assert_eq!(state.generated_alphabet_len, 26);
        let password = state.password.clone();
        let before = state.entropy_bits();

        let state = state
            .toggle_class(CharacterClass::Uppercase)
            .toggle_class(CharacterClass::Digit)
            .toggle_class(CharacterClass::Symbol);
        assert_eq!(state.password, password);
        assert_eq!(state.generated_alphabet_len, 26);
        assert_eq!(state.entropy_bits(), before);
        assert!((before - 16.0 * 26f64.log2()).abs() < 1e-9);

        // Regenerating picks up the new classes
        let state = state.submit(SamplingBound::Exclusive, &mut rng());
        assert_eq!(state.generated_alphabet_len, 76);
        assert!(state.entropy_bits() > before);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let state = FormState::new()
            .with_length_input("16")
            .toggle_class(CharacterClass::Uppercase)
            .toggle_class(CharacterClass::Symbol)
            .toggle_class(CharacterClass::Lowercase)
            .submit(SamplingBound::Inclusive, &mut rng());
        assert!(state.is_pass_generated);

        let state = state.reset();
        assert_eq!(state, FormState::default());
        assert_eq!(state.generated_alphabet_len, 0);
        assert_eq!(state.entropy_bits(), 0.0);
    }
}
