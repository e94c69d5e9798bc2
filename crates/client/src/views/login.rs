use super::{LocalizedTexts, Navigation};
use crate::{api::PricelistApi, language::Language, session::Session};
use shared::domain::responses::UserResponse;
use std::fmt;
use tracing::warn;

const LOGIN_FAILED: &str = "Login failed";

const DEFAULT_TEXTS: &[(&str, &str)] = &[
    ("title", "Log in"),
    ("usernameLabel", "Username"),
    ("passwordLabel", "Password"),
    ("loginButton", "Log in"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    Anonymous,
    Submitting,
    Authenticated(UserResponse),
    Error(String),
}

pub struct LoginView {
    state: LoginState,
    language: Language,
    texts: LocalizedTexts,
}

impl LoginView {
    pub fn new(language: Language) -> Self {
        Self {
            state: LoginState::Anonymous,
            language,
            texts: LocalizedTexts::defaults_only(DEFAULT_TEXTS),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub async fn load_texts(&mut self, api: &dyn PricelistApi) {
        self.texts = LocalizedTexts::fetch(api, "login", self.language, DEFAULT_TEXTS).await;
    }

    pub async fn switch_language(&mut self, api: &dyn PricelistApi, language: Language) {
        self.language = language;
        self.load_texts(api).await;
    }

    /// Checks the credentials. On success the token is stored in `session`
    /// and the caller is sent to the price list.
    pub async fn submit(
        &mut self,
        api: &dyn PricelistApi,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Option<Navigation> {
        self.state = LoginState::Submitting;

        let response = match api.login(username, password).await {
            Ok(response) => response,
            Err(err) => {
                warn!("login failed: {err}");
                self.state = LoginState::Error(err.user_message(LOGIN_FAILED));
                return None;
            }
        };

        let user = response.user.clone();
        if let Err(err) = session.sign_in(response).await {
            self.state = LoginState::Error(err.user_message(LOGIN_FAILED));
            return None;
        }

        self.state = LoginState::Authenticated(user);
        Some(Navigation::PriceList)
    }
}

impl fmt::Display for LoginView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} [{}] ==", self.texts.get("title"), self.language)?;
        match &self.state {
            LoginState::Anonymous => writeln!(
                f,
                "{} / {}",
                self.texts.get("usernameLabel"),
                self.texts.get("passwordLabel")
            ),
            LoginState::Submitting => writeln!(f, "..."),
            LoginState::Authenticated(user) => {
                writeln!(f, "{} ({})", user.full_name, user.location)
            }
            LoginState::Error(message) => writeln!(f, "! {message}"),
        }
    }
}
