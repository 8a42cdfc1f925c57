use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Writing context. Only `Casual` and `Formal` change which rules run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Email,
    Social,
    Professional,
    Casual,
    Formal,
    Technical,
    Medical,
    Legal,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::General,
        Category::Email,
        Category::Social,
        Category::Professional,
        Category::Casual,
        Category::Formal,
        Category::Technical,
        Category::Medical,
        Category::Legal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Email => "email",
            Category::Social => "social",
            Category::Professional => "professional",
            Category::Casual => "casual",
            Category::Formal => "formal",
            Category::Technical => "technical",
            Category::Medical => "medical",
            Category::Legal => "legal",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FORMAL".parse::<Category>().unwrap(), Category::Formal);
        assert_eq!(" casual ".parse::<Category>().unwrap(), Category::Casual);
        assert!("poetic".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
