//! Pet species type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The species categories the platform lists pets under.
///
/// The wire form is lowercase (`"cat"`, `"dog"`, ...). `Other` covers
/// everything the platform does not break out into its own category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
    Rabbit,
    Fish,
    Bird,
    Other,
}

impl Species {
    /// All categories, in the order the platform presents them.
    pub const ALL: [Species; 6] = [
        Species::Cat,
        Species::Dog,
        Species::Rabbit,
        Species::Fish,
        Species::Bird,
        Species::Other,
    ];

    /// Returns the lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Rabbit => "rabbit",
            Species::Fish => "fish",
            Species::Bird => "bird",
            Species::Other => "other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cat" => Ok(Species::Cat),
            "dog" => Ok(Species::Dog),
            "rabbit" => Ok(Species::Rabbit),
            "fish" => Ok(Species::Fish),
            "bird" => Ok(Species::Bird),
            "other" => Ok(Species::Other),
            _ => Err(InvalidInputError::Species {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_form() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert!("pony".parse::<Species>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Species::Rabbit).unwrap(), "\"rabbit\"");
        let s: Species = serde_json::from_str("\"bird\"").unwrap();
        assert_eq!(s, Species::Bird);
    }
}
