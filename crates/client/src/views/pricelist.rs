use super::Navigation;
use crate::{
    api::PricelistApi,
    error::{ClientError, NETWORK_ERROR_MESSAGE},
    session::Session,
};
use serde_json::Value;
use shared::domain::{
    product_field::ProductField,
    responses::{ProductResponse, UserResponse},
};
use std::fmt;
use tracing::{info, warn};

const UPDATE_FAILED: &str = "Update failed";

#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    Loaded,
    /// No usable session; the caller should show this page instead.
    Redirect(Navigation),
    /// The list could not be fetched. Carries the message to show.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Server confirmed; the local row now equals the returned one.
    Saved(ProductResponse),
    /// Server refused; the local row is untouched.
    Rejected(String),
    /// The token was missing or refused. The session is cleared.
    SessionExpired,
}

/// Editable product table. Local rows only change after the server
/// confirms an edit.
#[derive(Debug, Default)]
pub struct PriceListView {
    rows: Vec<ProductResponse>,
    user: Option<UserResponse>,
    article_filter: String,
    product_filter: String,
}

impl PriceListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<ProductResponse>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &[ProductResponse] {
        &self.rows
    }

    /// Loads the table. Only a failing session store is an `Err`; request
    /// failures come back as [`MountOutcome::Failed`] with a display message.
    pub async fn mount(
        &mut self,
        api: &dyn PricelistApi,
        session: &mut Session,
    ) -> Result<MountOutcome, ClientError> {
        let Some(token) = session.token().map(str::to_string) else {
            return Ok(MountOutcome::Redirect(Navigation::Login));
        };

        match api.products(&token).await {
            Ok(rows) => {
                info!("loaded {} products", rows.len());
                self.rows = rows;
                self.user = session.user().cloned();
                Ok(MountOutcome::Loaded)
            }
            Err(ClientError::Unauthorized(_)) => {
                warn!("session expired, signing out");
                session.sign_out().await?;
                self.rows.clear();
                Ok(MountOutcome::Redirect(Navigation::Login))
            }
            Err(err @ ClientError::Session(_)) => Err(err),
            Err(err) => {
                warn!("loading products failed: {err}");
                Ok(MountOutcome::Failed(err.user_message(NETWORK_ERROR_MESSAGE)))
            }
        }
    }

    pub async fn edit(
        &mut self,
        api: &dyn PricelistApi,
        session: &mut Session,
        id: i32,
        field: ProductField,
        value: &str,
    ) -> Result<EditOutcome, ClientError> {
        let Some(token) = session.token().map(str::to_string) else {
            return Ok(EditOutcome::SessionExpired);
        };

        match api
            .update_product(&token, id, field, Value::String(value.to_string()))
            .await
        {
            Ok(updated) => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.id == updated.id) {
                    *row = updated.clone();
                }
                Ok(EditOutcome::Saved(updated))
            }
            Err(ClientError::Unauthorized(_)) => {
                session.sign_out().await?;
                Ok(EditOutcome::SessionExpired)
            }
            Err(err @ ClientError::Session(_)) => Err(err),
            Err(err) => {
                warn!("edit of {field} on product {id} failed: {err}");
                Ok(EditOutcome::Rejected(err.user_message(UPDATE_FAILED)))
            }
        }
    }

    pub fn set_article_filter(&mut self, filter: impl Into<String>) {
        self.article_filter = filter.into();
    }

    pub fn set_product_filter(&mut self, filter: impl Into<String>) {
        self.product_filter = filter.into();
    }

    /// Rows matching both search boxes, case-insensitive substring match.
    pub fn visible_rows(&self) -> Vec<&ProductResponse> {
        let article = self.article_filter.to_lowercase();
        let product = self.product_filter.to_lowercase();

        self.rows
            .iter()
            .filter(|row| row.article_no.to_lowercase().contains(&article))
            .filter(|row| row.product_service.to_lowercase().contains(&product))
            .collect()
    }

    pub async fn logout(&mut self, session: &mut Session) -> Result<Navigation, ClientError> {
        session.sign_out().await?;
        self.rows.clear();
        self.user = None;
        Ok(Navigation::Login)
    }
}

impl fmt::Display for PriceListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user) = &self.user {
            writeln!(f, "{} - {}", user.full_name, user.location)?;
        }

        write!(f, "{:>4}", "ID")?;
        for field in ProductField::ALL {
            write!(f, " | {:<16}", field.column())?;
        }
        writeln!(f)?;

        for row in self.visible_rows() {
            write!(f, "{:>4}", row.id)?;
            for field in ProductField::ALL {
                write!(f, " | {:<16}", row.field_text(field))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
