//! Students and their declared gender.

use std::fmt;

/// Declared gender of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// A student to be seated.
///
/// Identity is by name. A student without a declared gender may sit in
/// any available seat regardless of the seat's restriction.
///
/// # Example
///
/// ```
/// use seatforge_core::{Gender, Student};
///
/// let alice = Student::female("Alice");
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice.gender(), Some(Gender::Female));
///
/// let bob: Student = "Bob".into();
/// assert_eq!(bob.gender(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    gender: Option<Gender>,
}

impl Student {
    /// Creates a student with no declared gender.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
        }
    }

    /// Creates a student with an optional declared gender.
    pub fn with_gender(name: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }

    pub fn male(name: impl Into<String>) -> Self {
        Self::with_gender(name, Some(Gender::Male))
    }

    pub fn female(name: impl Into<String>) -> Self {
        Self::with_gender(name, Some(Gender::Female))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }
}

impl From<&str> for Student {
    fn from(name: &str) -> Self {
        Student::new(name)
    }
}

impl From<String> for Student {
    fn from(name: String) -> Self {
        Student::new(name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gender {
            Some(gender) => write!(f, "{} ({})", self.name, gender),
            None => write!(f, "{}", self.name),
        }
    }
}
