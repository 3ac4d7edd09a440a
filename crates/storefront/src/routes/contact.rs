//! Contact page route handlers.
//!
//! Messages are acknowledged but not delivered anywhere; the form exists so
//! the page behaves like the rest of the shop.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::VisitorStorage;
use crate::routes::cart::CartView;
use crate::routes::layout::{Chrome, ThemeView};
use crate::state::AppState;

/// Acknowledgement shown after a successful submission.
pub const THANK_YOU: &str = "Thank you for your message! We will reply shortly.";

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Validate required fields, returning a visitor-facing error.
    fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err("Name and message are required.");
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Please enter a valid email address.");
        }
        Ok(())
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub theme: ThemeView,
    pub cart: CartView,
    pub status: Option<&'static str>,
    pub error: Option<&'static str>,
}

/// Display the contact page.
#[instrument(skip(state, storage))]
pub async fn show(State(state): State<AppState>, mut storage: VisitorStorage) -> impl IntoResponse {
    let Chrome { theme, cart } = Chrome::restore(&mut storage, state.catalogue());
    ContactTemplate {
        theme,
        cart,
        status: None,
        error: None,
    }
}

/// Accept a contact form submission.
///
/// Success re-renders an empty form with the thank-you status.
#[instrument(skip(state, storage, form))]
pub async fn submit(
    State(state): State<AppState>,
    mut storage: VisitorStorage,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let Chrome { theme, cart } = Chrome::restore(&mut storage, state.catalogue());

    match form.validate() {
        Ok(()) => {
            tracing::info!(message_len = form.message.len(), "Contact message received");
            (
                StatusCode::OK,
                ContactTemplate {
                    theme,
                    cart,
                    status: Some(THANK_YOU),
                    error: None,
                },
            )
        }
        Err(error) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                theme,
                cart,
                status: None,
                error: Some(error),
            },
        ),
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form("Ada", "ada@example.com", "Do you ship?").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(form("  ", "ada@example.com", "Hi").validate().is_err());
        assert!(form("Ada", "ada@example.com", "").validate().is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("no-at-symbol"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@localhost"));
    }
}
