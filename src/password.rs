use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::charset::CharacterClasses;
use crate::validation::GenerationRequest;

/// How the per-position index is drawn from the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SamplingBound {
    /// Index drawn from `0..=alphabet.len()`. The top index is out of range
    /// and contributes nothing, so a password can come out shorter than asked.
    Inclusive,
    /// Index drawn from `0..alphabet.len()`. Output length always matches.
    #[default]
    Exclusive,
}

/// Generates a password of up to `length` characters from the alphabet of the
/// enabled `classes`.
///
/// Not suitable for secrets that need cryptographic guarantees unless `rng`
/// is itself a CSPRNG. No bounds checking is done on `length`; callers go
/// through [`crate::validation::validate_length`] first.
///
/// An empty class set yields an empty string.
pub fn generate_password<R: Rng>(
    length: usize,
    classes: CharacterClasses,
    bound: SamplingBound,
    rng: &mut R,
) -> String {
    let chars = classes.alphabet();
    if chars.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(length);
    for _ in 0..length {
        let idx = match bound {
            SamplingBound::Inclusive => rng.random_range(0..=chars.len()),
            SamplingBound::Exclusive => rng.random_range(0..chars.len()),
        };
        if let Some(&c) = chars.get(idx) {
            result.push(c);
        }
    }
    result
}

/// Generator configured with a sampling bound, fed validated requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator {
    bound: SamplingBound,
}

impl PasswordGenerator {
    pub fn new(bound: SamplingBound) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> SamplingBound {
        self.bound
    }

    pub fn generate<R: Rng>(&self, request: &GenerationRequest, rng: &mut R) -> String {
        generate_password(request.length(), request.classes(), self.bound, rng)
    }
}

/// Rough strength estimate in bits: `length * log2(alphabet_len)`.
pub fn estimate_entropy(alphabet_len: usize, length: usize) -> f64 {
    if alphabet_len == 0 || length == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_len as f64).log2()
}

/// Weak / Okay / Strong bucket for an entropy value.
pub fn strength_label(bits: f64) -> &'static str {
    if bits < 60.0 {
        "Weak"
    } else if bits <= 100.0 {
        "Okay"
    } else {
        "Strong"
    }
}
