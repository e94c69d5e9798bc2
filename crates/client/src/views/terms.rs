use super::LocalizedTexts;
use crate::{api::PricelistApi, language::Language};
use std::fmt;

const DEFAULT_TEXTS: &[(&str, &str)] = &[
    ("title", "Terms and Conditions"),
    ("backButton", "Go Back"),
    ("section1Title", "General Terms"),
    (
        "section1Content",
        "By using this service, you agree to these terms and conditions.",
    ),
    ("section2Title", "User Responsibilities"),
    (
        "section2Content",
        "Users are responsible for maintaining the confidentiality of their account.",
    ),
    ("section3Title", "Privacy Policy"),
    (
        "section3Content",
        "We respect your privacy and protect your personal information.",
    ),
    ("section4Title", "Limitation of Liability"),
    (
        "section4Content",
        "The service is provided as is without any warranties.",
    ),
    ("section5Title", "Changes to Terms"),
    (
        "section5Content",
        "We reserve the right to modify these terms at any time.",
    ),
];

const SECTIONS: usize = 5;

pub struct TermsView {
    language: Language,
    texts: LocalizedTexts,
}

impl TermsView {
    pub async fn load(api: &dyn PricelistApi, language: Language) -> Self {
        Self {
            language,
            texts: LocalizedTexts::fetch(api, "terms", language, DEFAULT_TEXTS).await,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts.get(key)
    }

    pub async fn toggle_language(&mut self, api: &dyn PricelistApi) {
        *self = Self::load(api, self.language.toggle()).await;
    }
}

impl fmt::Display for TermsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.text("title"))?;
        for section in 1..=SECTIONS {
            writeln!(f)?;
            writeln!(f, "{}", self.text(&format!("section{section}Title")))?;
            writeln!(f, "  {}", self.text(&format!("section{section}Content")))?;
        }
        writeln!(f)?;
        write!(f, "[{}]", self.text("backButton"))
    }
}
