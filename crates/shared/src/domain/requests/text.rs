use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TextQuery {
    /// Language code, `en` when omitted.
    pub lang: Option<String>,
}

impl TextQuery {
    pub fn language(&self) -> &str {
        match self.lang.as_deref() {
            Some(lang) if !lang.trim().is_empty() => lang.trim(),
            _ => DEFAULT_LANGUAGE,
        }
    }
}
