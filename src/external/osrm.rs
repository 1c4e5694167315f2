use async_trait::async_trait;
use geo_types::LineString;
use serde::{Deserialize, Serialize};

use super::RoutingService;
use crate::{
    entities::{RoutePath, RouteRequest},
    error::{invalid_input_error, no_route_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Route {
    distance: f64,
    duration: f64,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    code: String,
    message: Option<String>,
    routes: Option<Vec<Route>>,
}

/// Client for the OSRM `route` service.
#[derive(Clone, Debug)]
pub struct OsrmClient {
    api_base: String,
    profile: String,
    client: reqwest::Client,
}

impl OsrmClient {
    pub fn new(api_base: &str, profile: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').into(),
            profile: profile.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, request: &RouteRequest) -> String {
        let waypoints = request
            .waypoints
            .iter()
            .map(|c| format!("{},{}", c.longitude(), c.latitude()))
            .collect::<Vec<_>>()
            .join(";");

        format!("{}/route/v1/{}/{}", self.api_base, self.profile, waypoints)
    }
}

fn into_path(status_code: u16, data: Response) -> Result<RoutePath, Error> {
    match data.code.as_str() {
        "Ok" => {}
        "NoRoute" | "NoSegment" => return Err(no_route_error()),
        code => {
            tracing::warn!(code, message = ?data.message, "routing request rejected");

            if (400..500).contains(&status_code) {
                return Err(invalid_input_error());
            }
            return Err(upstream_error());
        }
    }

    let route = data
        .routes
        .and_then(|routes| routes.into_iter().next())
        .ok_or_else(no_route_error)?;

    let geometry: LineString<f64> = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[x, y]| (x, y))
        .collect::<Vec<_>>()
        .into();

    Ok(RoutePath {
        geometry,
        distance: route.distance,
        duration: route.duration,
    })
}

#[async_trait]
impl RoutingService for OsrmClient {
    #[tracing::instrument(skip(self))]
    async fn find_route(&self, request: &RouteRequest) -> Result<RoutePath, Error> {
        if request.waypoints.len() < 2 {
            return Err(invalid_input_error());
        }

        let res = self
            .client
            .get(self.url(request))
            .query(&[("overview", "full")])
            .query(&[("geometries", "geojson")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 500 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        into_path(status_code, data)
    }
}
