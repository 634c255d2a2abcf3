//! PassGen: a small password generator form.
//!
//! The library holds everything that can run without a window: character
//! classes, the generator, length validation, the form state machine and
//! persisted settings. The binary wraps it in an `eframe` app.

pub mod app;
pub mod charset;
pub mod error;
pub mod manager;
pub mod password;
pub mod settings;
pub mod state;
pub mod validation;

pub use charset::{CharacterClass, CharacterClasses};
pub use error::{Error, Result};
pub use password::{PasswordGenerator, SamplingBound, generate_password};
pub use state::FormState;
pub use validation::{GenerationRequest, ValidationError, validate_length};
