mod login;
mod pricelist;
mod terms;

pub use self::login::{LoginState, LoginView};
pub use self::pricelist::{EditOutcome, MountOutcome, PriceListView};
pub use self::terms::TermsView;

use crate::{api::PricelistApi, language::Language};
use shared::domain::responses::TextsResponse;
use tracing::warn;

/// Where the front end should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Login,
    PriceList,
    Terms,
}

/// Server texts for one page with built-in English fallbacks per key.
#[derive(Debug, Clone)]
pub struct LocalizedTexts {
    texts: TextsResponse,
    defaults: &'static [(&'static str, &'static str)],
}

impl LocalizedTexts {
    pub fn defaults_only(defaults: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            texts: TextsResponse::new(),
            defaults,
        }
    }

    /// Fetches `page` in `language`. A failed fetch leaves only the defaults.
    pub async fn fetch(
        api: &dyn PricelistApi,
        page: &str,
        language: Language,
        defaults: &'static [(&'static str, &'static str)],
    ) -> Self {
        let texts = match api.texts(page, language).await {
            Ok(texts) => texts,
            Err(err) => {
                warn!("texts for {page}/{language} unavailable: {err}");
                TextsResponse::new()
            }
        };
        Self { texts, defaults }
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .or_else(|| {
                self.defaults
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| *v)
            })
            .unwrap_or(key)
    }
}
