use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::change_password::change_password;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::profile::get_profile;
use super::handlers::register::register;
use super::handlers::update_profile::update_profile;
use super::handlers::ApiError;
use super::middleware::authenticate as auth_middleware;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::panic_message;
use crate::inbound::INTERNAL_ERROR_MESSAGE;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
}

pub fn create_router(user_service: Arc<dyn UserServicePort>) -> Router {
    let state = AppState { user_service };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/v1/users/register", post(register))
        .route("/v1/users/login", post(login));

    let protected_routes = Router::new()
        .route("/v1/users/profile", get(get_profile))
        .route("/v1/users/update", post(update_profile))
        .route("/v1/users/change-password", put(change_password))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Headers are left out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    tracing::error!(message = %panic_message(&*payload), "handler panicked");
    ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string()).into_response()
}
