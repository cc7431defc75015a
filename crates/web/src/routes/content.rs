//! Randomized content fragment handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::services::random::ContentRandomizer;

/// Display parts for the online/offline indicator.
pub struct StatusParts {
    pub text: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Map an online flag to its display text, color class, and icon.
#[must_use]
pub fn status_parts(is_online: bool) -> StatusParts {
    if is_online {
        StatusParts {
            text: "Online",
            color: "bg-green-500",
            icon: "\u{1f7e2}",
        }
    } else {
        StatusParts {
            text: "Offline",
            color: "bg-red-500",
            icon: "\u{1f534}",
        }
    }
}

/// Dynamic content fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/dynamic_content.html")]
pub struct DynamicContentTemplate {
    pub quote: &'static str,
    pub color: &'static str,
    pub timestamp: String,
}

/// Online status fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/online_status.html")]
pub struct OnlineStatusTemplate {
    pub is_online: bool,
    pub status_text: &'static str,
    pub status_color: &'static str,
    pub status_icon: &'static str,
}

/// Return a freshly randomized quote/color/timestamp fragment.
#[instrument]
pub async fn update_content() -> impl IntoResponse {
    DynamicContentTemplate {
        quote: ContentRandomizer::pick_quote(),
        color: ContentRandomizer::pick_color(),
        timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
    }
}

/// Return a freshly randomized online/offline status fragment.
#[instrument]
pub async fn online_status() -> impl IntoResponse {
    let is_online = ContentRandomizer::pick_online_status();
    let parts = status_parts(is_online);
    OnlineStatusTemplate {
        is_online,
        status_text: parts.text,
        status_color: parts.color,
        status_icon: parts.icon,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parts_online() {
        let parts = status_parts(true);
        assert_eq!(parts.text, "Online");
        assert_eq!(parts.color, "bg-green-500");
        assert_eq!(parts.icon, "🟢");
    }

    #[test]
    fn test_status_parts_offline() {
        let parts = status_parts(false);
        assert_eq!(parts.text, "Offline");
        assert_eq!(parts.color, "bg-red-500");
        assert_eq!(parts.icon, "🔴");
    }
}
