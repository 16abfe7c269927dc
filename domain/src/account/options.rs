//! Profile options offered at signup.
//!
//! Accounts store country and language as plain strings; these enums are the
//! closed pick-lists the signup form offers.

use crate::core::error::DomainError;
use std::fmt;

/// Countries selectable at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    India,
    Usa,
    Germany,
    France,
    Other,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::India,
        Country::Usa,
        Country::Germany,
        Country::France,
        Country::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Usa => "USA",
            Country::Germany => "Germany",
            Country::France => "France",
            Country::Other => "Other",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownCountry(s.to_string()))
    }
}

/// Preferred languages selectable at signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    German,
    French,
    Other,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::German,
        Language::French,
        Language::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::German => "German",
            Language::French => "French",
            Language::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_parse_case_insensitive() {
        assert_eq!("usa".parse::<Country>().unwrap(), Country::Usa);
        assert_eq!("Germany".parse::<Country>().unwrap(), Country::Germany);
        assert_eq!(Country::Usa.to_string(), "USA");
    }

    #[test]
    fn test_country_unknown() {
        assert_eq!(
            "Atlantis".parse::<Country>(),
            Err(DomainError::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("hindi".parse::<Language>().unwrap(), Language::Hindi);
        assert!("Klingon".parse::<Language>().is_err());
    }
}
