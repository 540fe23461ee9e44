//! Data transfer objects for web requests and responses.
//!
//! Field names are part of the public API and keep their capitalised form.

use serde::{Deserialize, Serialize};

use crate::domain::{Point, Route, Trip};

/// Form to add a point.
#[derive(Debug, Deserialize)]
pub struct AddPointForm {
    #[serde(rename = "point-name")]
    pub point_name: String,
}

/// Form to add or update a route.
#[derive(Debug, Deserialize)]
pub struct RouteForm {
    pub from: String,
    pub to: String,
    pub time: u32,
    pub cost: u32,
}

/// Response carrying a plain outcome message.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    /// The `{"result":"Ok"}` body.
    pub fn ok() -> Self {
        Self::new("Ok")
    }

    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// A route in responses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub cost: u32,
    pub time: u32,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            from: route.from().to_string(),
            to: route.to().to_string(),
            cost: route.cost,
            time: route.time,
        }
    }
}

/// A trip in responses.
#[derive(Debug, Serialize)]
pub struct TripResult {
    #[serde(rename = "Routes")]
    pub routes: Vec<RouteResult>,

    #[serde(rename = "TotalTime")]
    pub total_time: u64,

    #[serde(rename = "TotalCost")]
    pub total_cost: u64,

    #[serde(rename = "Fastest")]
    pub fastest: bool,

    #[serde(rename = "Cheapest")]
    pub cheapest: bool,
}

impl TripResult {
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            routes: trip.routes().iter().map(RouteResult::from_route).collect(),
            total_time: trip.total_time(),
            total_cost: trip.total_cost(),
            fastest: trip.is_fastest(),
            cheapest: trip.is_cheapest(),
        }
    }
}

fn names(points: &[Point]) -> Vec<String> {
    points.iter().map(Point::to_string).collect()
}

fn routes(routes: &[Route]) -> Vec<RouteResult> {
    routes.iter().map(RouteResult::from_route).collect()
}

/// Response for `/points`.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    #[serde(rename = "Points")]
    pub points: Vec<String>,
}

impl PointsResponse {
    pub fn new(points: &[Point]) -> Self {
        Self {
            points: names(points),
        }
    }
}

/// Response for `/point/:name`.
#[derive(Debug, Serialize)]
pub struct PointResponse {
    #[serde(rename = "Point")]
    pub point: String,
}

/// Response for `/routes`.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    #[serde(rename = "Routes")]
    pub routes: Vec<RouteResult>,
}

impl RoutesResponse {
    pub fn new(list: &[Route]) -> Self {
        Self {
            routes: routes(list),
        }
    }
}

/// Response for `/route/:from/:to`.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    #[serde(rename = "Route")]
    pub route: RouteResult,
}

/// Response for `/map`.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    #[serde(rename = "Points")]
    pub points: Vec<String>,

    #[serde(rename = "Routes")]
    pub routes: Vec<RouteResult>,
}

impl MapResponse {
    pub fn new(points: &[Point], list: &[Route]) -> Self {
        Self {
            points: names(points),
            routes: routes(list),
        }
    }
}

/// Response for `/all-trips/:from/:to`.
#[derive(Debug, Serialize)]
pub struct AllTripsResponse {
    #[serde(rename = "PossibleRoutes")]
    pub possible_routes: Vec<TripResult>,

    /// Lowest total time, 0 if there are no trips
    #[serde(rename = "MinTime")]
    pub min_time: u64,

    /// Lowest total cost, 0 if there are no trips
    #[serde(rename = "MinCost")]
    pub min_cost: u64,
}

impl AllTripsResponse {
    pub fn new(trips: &[Trip]) -> Self {
        Self {
            possible_routes: trips.iter().map(TripResult::from_trip).collect(),
            min_time: trips.iter().map(Trip::total_time).min().unwrap_or(0),
            min_cost: trips.iter().map(Trip::total_cost).min().unwrap_or(0),
        }
    }
}

/// Response for `/fastest-trip` and `/cheapest-trip`.
#[derive(Debug, Serialize)]
pub struct BestTripResponse {
    #[serde(rename = "Trip")]
    pub trip: TripResult,

    #[serde(rename = "TotalTime")]
    pub total_time: u64,

    #[serde(rename = "TotalCost")]
    pub total_cost: u64,
}

impl BestTripResponse {
    pub fn new(trip: &Trip) -> Self {
        Self {
            trip: TripResult::from_trip(trip),
            total_time: trip.total_time(),
            total_cost: trip.total_cost(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
