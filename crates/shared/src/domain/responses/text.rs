use std::collections::BTreeMap;

/// Key → localized value for one page and language.
pub type TextsResponse = BTreeMap<String, String>;
