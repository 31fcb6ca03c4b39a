use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::utils::error::PortfolioError;

/// Errors surfaced by request handlers.
#[derive(Debug)]
pub struct AppError(PortfolioError);

impl From<PortfolioError> for AppError {
    fn from(err: PortfolioError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(
            "❌ Request failed: {} (Category: {:?})",
            self.0,
            self.0.category()
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!(
                "<h1>Something went wrong</h1><p>{}</p>",
                self.0.user_friendly_message()
            )),
        )
            .into_response()
    }
}

pub type HandlerResult<T> = std::result::Result<T, AppError>;
