use serde::{Deserialize, Serialize};

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "1234567890";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+=-";

/// A named category of characters with a fixed literal alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in alphabet concatenation order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Symbol => SYMBOL_CHARS,
        }
    }

    /// Checkbox caption shown in the form
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include Uppercase letters",
            CharacterClass::Lowercase => "Include Lowercase letters",
            CharacterClass::Digit => "Include numbers",
            CharacterClass::Symbol => "Include special characters",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Uppercase => 0b0001,
            CharacterClass::Lowercase => 0b0010,
            CharacterClass::Digit => 0b0100,
            CharacterClass::Symbol => 0b1000,
        }
    }
}

/// Set of enabled character classes, stored as a bitmask.
///
/// Iteration always follows [`CharacterClass::ALL`], regardless of the order
/// classes were inserted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CharacterClass>", into = "Vec<CharacterClass>")]
pub struct CharacterClasses(u8);

impl CharacterClasses {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn only(class: CharacterClass) -> Self {
        Self(class.bit())
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    /// Returns the set with `class` flipped.
    pub fn toggled(self, class: CharacterClass) -> Self {
        Self(self.0 ^ class.bit())
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> {
        let set = *self;
        CharacterClass::ALL.into_iter().filter(move |c| set.contains(*c))
    }

    /// Concatenated alphabet of every enabled class.
    pub fn alphabet(&self) -> Vec<char> {
        self.iter().flat_map(|c| c.alphabet().chars()).collect()
    }
}

impl FromIterator<CharacterClass> for CharacterClasses {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl From<Vec<CharacterClass>> for CharacterClasses {
    fn from(classes: Vec<CharacterClass>) -> Self {
        classes.into_iter().collect()
    }
}

impl From<CharacterClasses> for Vec<CharacterClass> {
    fn from(set: CharacterClasses) -> Self {
        set.iter().collect()
    }
}
