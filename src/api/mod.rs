use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::NimbusError;
use crate::widget::{WeatherWidget, WidgetSnapshot};

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SelectRequest {
    pub index: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// Failure returned to the host page as `{ "error": "..." }`
pub struct ApiError(NimbusError);

impl From<NimbusError> for ApiError {
    fn from(err: NimbusError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            NimbusError::Validation { .. } => StatusCode::BAD_REQUEST,
            NimbusError::LookupFailure { .. }
            | NimbusError::ForecastFetchFailure { .. }
            | NimbusError::NoForecastData => StatusCode::BAD_GATEWAY,
            NimbusError::Config { .. } | NimbusError::Unknown { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ApiErrorBody {
            error: self.0.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(widget: WeatherWidget) -> Router {
    Router::new()
        .route("/weather", get(get_weather))
        .route("/search", post(search))
        .route("/select", post(select))
        .with_state(widget)
}

async fn get_weather(State(widget): State<WeatherWidget>) -> Json<WidgetSnapshot> {
    Json(widget.snapshot().await)
}

/// Lookup failures settle into the snapshot's `error` field, like any
/// other search outcome.
async fn search(
    State(widget): State<WeatherWidget>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<WidgetSnapshot>, ApiError> {
    if request.query.trim().is_empty() {
        return Err(NimbusError::validation("Location cannot be empty").into());
    }
    Ok(Json(widget.submit(&request.query).await))
}

async fn select(
    State(widget): State<WeatherWidget>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<WidgetSnapshot>, ApiError> {
    Ok(Json(widget.select(request.index).await?))
}
