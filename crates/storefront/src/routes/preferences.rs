//! Visitor preference handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{AppendHeaders, IntoResponse, Response};
use clothing_co_core::PreferenceStore;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::VisitorStorage;
use crate::routes::layout::ThemeView;

/// Dark-mode toggle icon fragment (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/theme_icon.html")]
pub struct ThemeIconTemplate {
    pub theme: ThemeView,
}

/// Flip dark mode and return the new toggle icon.
///
/// Triggers `theme-changed` with the new state so the page can swap the
/// `dark` class on `<body>`.
#[instrument(skip(storage))]
pub async fn toggle_dark(mut storage: VisitorStorage) -> Result<Response> {
    let theme = {
        let mut prefs = PreferenceStore::restore(&mut storage);
        prefs.toggle();
        prefs.theme()
    };
    storage.commit().await?;

    tracing::debug!(dark = theme.is_dark(), "Dark mode toggled");
    let trigger = if theme.is_dark() {
        r#"{"theme-changed":{"dark":true}}"#
    } else {
        r#"{"theme-changed":{"dark":false}}"#
    };

    Ok((
        AppendHeaders([("HX-Trigger", trigger)]),
        ThemeIconTemplate {
            theme: theme.into(),
        },
    )
        .into_response())
}
