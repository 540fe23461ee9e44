//! HTTP route handlers.

use axum::{
    Form, Json, Router, async_trait,
    extract::{FromRequest, Path, Request, State, rejection::FormRejection},
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::load::{self, LoadError};
use crate::service::DeliveryError;

use super::auth::require_admin;
use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// Reads are public; anything that changes the network requires the admin
/// credentials.
pub fn create_router(state: AppState) -> Router {
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/health", get(health))
        .route("/map", get(get_map))
        .route(
            "/load-default-map",
            put(load_default_map).route_layer(admin.clone()),
        )
        .route("/clear-map", delete(clear_map).route_layer(admin.clone()))
        .route("/points", get(list_points))
        .route("/point/:name", get(get_point))
        .route("/point", post(add_point).route_layer(admin.clone()))
        .route("/routes", get(list_routes))
        .route(
            "/route",
            post(add_route).put(update_route).route_layer(admin.clone()),
        )
        .route(
            "/route/:from/:to",
            get(get_route).merge(delete(delete_route).route_layer(admin)),
        )
        .route("/all-trips/:from/:to", get(all_trips))
        .route("/fastest-trip/:from/:to", get(fastest_trip))
        .route("/cheapest-trip/:from/:to", get(cheapest_trip))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run network work off the async runtime.
async fn blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal {
            message: e.to_string(),
        })?
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Replace the network with the configured map.
async fn load_default_map(State(state): State<AppState>) -> Result<Json<ResultResponse>, AppError> {
    blocking(move || {
        match &state.map_file {
            Some(path) => load::load_map_file(&state.service, path.as_path())?,
            None => load::load_default_map(&state.service)?,
        };
        Ok(())
    })
    .await?;

    Ok(Json(ResultResponse::ok()))
}

/// The whole network.
async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    let (points, routes) = state.service.map();
    Json(MapResponse::new(&points, &routes))
}

/// Remove every point and route.
async fn clear_map(State(state): State<AppState>) -> Json<ResultResponse> {
    state.service.clear();
    Json(ResultResponse::ok())
}

async fn list_points(State(state): State<AppState>) -> Json<PointsResponse> {
    Json(PointsResponse::new(&state.service.list_points()))
}

async fn get_point(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PointResponse>, AppError> {
    let point = state.service.get_point(&name).ok_or_else(|| AppError::NotFound {
        message: format!("the point [{name}] does not exist"),
    })?;

    Ok(Json(PointResponse {
        point: point.to_string(),
    }))
}

async fn add_point(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<AddPointForm>,
) -> Result<Json<ResultResponse>, AppError> {
    state.service.add_point(&form.point_name)?;
    Ok(Json(ResultResponse::ok()))
}

async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    Json(RoutesResponse::new(&state.service.list_routes()))
}

async fn get_route(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<RouteResponse>, AppError> {
    let route = state.service.get_route(&from, &to)?.ok_or_else(|| {
        AppError::NotFound {
            message: format!("there is no route set from point [{from}] to [{to}]"),
        }
    })?;

    Ok(Json(RouteResponse {
        route: RouteResult::from_route(&route),
    }))
}

async fn add_route(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<RouteForm>,
) -> Result<Json<ResultResponse>, AppError> {
    state
        .service
        .add_route(&form.from, &form.to, form.time, form.cost)?;
    Ok(Json(ResultResponse::ok()))
}

async fn update_route(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<RouteForm>,
) -> Result<Json<ResultResponse>, AppError> {
    let route = state
        .service
        .update_route(&form.from, &form.to, form.time, form.cost)?;

    Ok(Json(ResultResponse::new(format!(
        "The Route ({}->{}) was updated! [Time: {} Cost: {}]",
        route.from(),
        route.to(),
        route.time,
        route.cost
    ))))
}

async fn delete_route(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<ResultResponse>, AppError> {
    state.service.delete_route(&from, &to)?;
    Ok(Json(ResultResponse::new(format!(
        "The route ({from}->{to}) was deleted!"
    ))))
}

async fn all_trips(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<AllTripsResponse>, AppError> {
    let trips = blocking(move || Ok(state.service.all_trips(&from, &to)?)).await?;
    Ok(Json(AllTripsResponse::new(&trips)))
}

async fn fastest_trip(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<BestTripResponse>, AppError> {
    let trip = blocking(move || {
        state
            .service
            .fastest_trip(&from, &to)?
            .ok_or_else(|| no_trip(&from, &to))
    })
    .await?;

    Ok(Json(BestTripResponse::new(&trip)))
}

async fn cheapest_trip(
    State(state): State<AppState>,
    Path((from, to)): Path<(String, String)>,
) -> Result<Json<BestTripResponse>, AppError> {
    let trip = blocking(move || {
        state
            .service
            .cheapest_trip(&from, &to)?
            .ok_or_else(|| no_trip(&from, &to))
    })
    .await?;

    Ok(Json(BestTripResponse::new(&trip)))
}

fn no_trip(from: &str, to: &str) -> AppError {
    AppError::NotFound {
        message: format!("there is no trip from point [{from}] to [{to}]"),
    }
}

/// Form extractor that rejects bad bodies with the JSON error shape.
pub struct ApiForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unauthorized,
    Internal { message: String },
}

impl From<DeliveryError> for AppError {
    fn from(e: DeliveryError) -> Self {
        let message = e.to_string();
        match e {
            DeliveryError::PointNotFound(_) | DeliveryError::RouteNotFound { .. } => {
                AppError::NotFound { message }
            }
            DeliveryError::ExistingPoint(_) | DeliveryError::ExistingRoute { .. } => {
                AppError::Conflict { message }
            }
            DeliveryError::InvalidRoute(_) | DeliveryError::InvalidPoint(_) => {
                AppError::BadRequest { message }
            }
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(e: FormRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Unauthorized => {
                let body = Json(ErrorResponse {
                    error: "Invalid Authentication".to_string(),
                });
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Basic realm=\"delivery\"")],
                    body,
                )
                    .into_response();
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
