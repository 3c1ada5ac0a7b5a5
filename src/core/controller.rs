use std::sync::Arc;
use std::time::Instant;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: Arc<dyn BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, store: Arc<dyn BookRepository>) -> AppState {
        AppState {
            config,
            store,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidArgument { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
        }
    }
}

// log_requests records the start and outcome of every call along with its latency
pub(crate) async fn log_requests<B>(req: Request<B>, next: Next<B>) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    tracing::info!(request_id = %request_id, method = %method, path = %path, "request started");

    let res = next.run(req).await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let status = res.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(request_id = %request_id, method = %method, path = %path,
            status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(request_id = %request_id, method = %method, path = %path,
            status = status.as_u16(), elapsed_ms, "request completed");
    }
    res
}
