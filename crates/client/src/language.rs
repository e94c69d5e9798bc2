use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sv,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sv => "sv",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Sv,
            Language::Sv => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "sv" => Ok(Language::Sv),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggle(), Language::Sv);
        assert_eq!(Language::Sv.toggle().toggle(), Language::Sv);
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("SV".parse::<Language>().unwrap(), Language::Sv);
        assert!("fi".parse::<Language>().is_err());
    }
}
