use axum::{http::StatusCode, response::IntoResponse};

use crate::view::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    #[error("400 Bad Request")]
    BadRequest,

    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("403 Forbidden")]
    Forbidden,

    #[error("404 Not Found")]
    NotFound,

    #[error("500 Internal Server Error")]
    Render(#[from] RenderError),

    #[error("500 Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ScoreboardError {
    pub fn status(&self) -> StatusCode {
        use ScoreboardError::*;

        match self {
            BadRequest => StatusCode::BAD_REQUEST,
            Unauthorized => StatusCode::UNAUTHORIZED,
            Forbidden => StatusCode::FORBIDDEN,
            NotFound => StatusCode::NOT_FOUND,
            Render(_) | Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ScoreboardError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ScoreboardError::Render(ref inner) => {
                tracing::error!("Failed to render page: {inner}");
            }
            ScoreboardError::Internal(ref inner) => {
                tracing::error!("Internal server error: {inner}");
            }
            _ => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_keep_their_status() {
        assert_eq!(
            ScoreboardError::BadRequest.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ScoreboardError::Forbidden.into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ScoreboardError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn render_failures_are_internal_errors() {
        let error = ScoreboardError::from(RenderError::UnknownRoute("admin_users".into()));

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "500 Internal Server Error");
    }

    #[test]
    fn anyhow_errors_are_internal_errors() {
        let error = ScoreboardError::from(anyhow::anyhow!("session store unavailable"));

        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
