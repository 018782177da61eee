// Thin HTTP layer over the recommendation engine: one GET route, query-param
// parsing and error-to-status mapping. Everything interesting lives in the
// engine; this module only translates.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::availability::AvailabilityGetter;
use crate::money::{Currency, Money};
use crate::recommendation::{RecommendationError, RecommendationService};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub budget: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(rename = "hotelName")]
    pub hotel_name: String,
    #[serde(rename = "totalCost")]
    pub total_cost: TotalCost,
}

#[derive(Debug, Serialize)]
pub struct TotalCost {
    pub cost: i64,
    pub currency: &'static str,
}

pub fn router<A>(svc: Arc<RecommendationService<A>>) -> Router
where
    A: AvailabilityGetter + 'static,
{
    Router::new()
        .route("/recommendation", get(get_recommendation::<A>))
        .with_state(svc)
}

async fn get_recommendation<A>(
    State(svc): State<Arc<RecommendationService<A>>>,
    Query(params): Query<RecommendationParams>,
) -> Response
where
    A: AvailabilityGetter + 'static,
{
    // Missing parameters are reported one at a time, first offender wins.
    let Some(location) = params.location else {
        return bad_request("location is required");
    };
    let Some(from) = params.from else {
        return bad_request("from is required");
    };
    let Some(to) = params.to else {
        return bad_request("to is required");
    };
    let Some(budget) = params.budget else {
        return bad_request("budget is required");
    };

    let Ok(trip_start) = NaiveDate::parse_from_str(&from, DATE_FORMAT) else {
        return bad_request("invalid from date");
    };
    let Ok(trip_end) = NaiveDate::parse_from_str(&to, DATE_FORMAT) else {
        return bad_request("invalid to date");
    };
    let Ok(budget) = budget.parse::<i64>() else {
        return bad_request("invalid budget");
    };
    let budget = Money::new(budget, Currency::Usd);

    match svc
        .get(Some(trip_start), Some(trip_end), &location, budget)
        .await
    {
        Ok(rec) => {
            let body = RecommendationResponse {
                hotel_name: rec.hotel_name,
                total_cost: TotalCost {
                    cost: rec.trip_price.amount(),
                    currency: rec.trip_price.currency().code(),
                },
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(location, error = %err, "recommendation request failed");
            (error_status(&err), err.to_string()).into_response()
        }
    }
}

fn bad_request(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

fn error_status(err: &RecommendationError) -> StatusCode {
    match err {
        RecommendationError::Validation { .. } => StatusCode::BAD_REQUEST,
        RecommendationError::NoOptionsAvailable => StatusCode::NOT_FOUND,
        RecommendationError::Availability(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::{AvailabilityError, HotelOption};
    use async_trait::async_trait;

    struct FixedAvailability {
        options: Vec<HotelOption>,
    }

    #[async_trait]
    impl AvailabilityGetter for FixedAvailability {
        async fn get_availability(
            &self,
            _trip_start: NaiveDate,
            _trip_end: NaiveDate,
            _location: &str,
        ) -> Result<Vec<HotelOption>, AvailabilityError> {
            Ok(self.options.clone())
        }
    }

    fn service_with(options: Vec<HotelOption>) -> Arc<RecommendationService<FixedAvailability>> {
        Arc::new(RecommendationService::new(FixedAvailability { options }))
    }

    fn nyc_hotels() -> Vec<HotelOption> {
        vec![
            HotelOption {
                location: "NYC".to_string(),
                hotel_name: "HotelA".to_string(),
                price_per_night: Money::new(100, Currency::Usd),
            },
            HotelOption {
                location: "NYC".to_string(),
                hotel_name: "HotelB".to_string(),
                price_per_night: Money::new(150, Currency::Usd),
            },
        ]
    }

    fn full_params() -> RecommendationParams {
        RecommendationParams {
            location: Some("NYC".to_string()),
            from: Some("2024-01-01".to_string()),
            to: Some("2024-01-04".to_string()),
            budget: Some("500".to_string()),
        }
    }

    async fn call(
        svc: Arc<RecommendationService<FixedAvailability>>,
        params: RecommendationParams,
    ) -> Response {
        get_recommendation(State(svc), Query(params)).await
    }

    #[tokio::test]
    async fn test_successful_recommendation_is_200() {
        let response = call(service_with(nyc_hotels()), full_params()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_params_are_400() {
        for missing in ["location", "from", "to", "budget"] {
            let mut params = full_params();
            match missing {
                "location" => params.location = None,
                "from" => params.from = None,
                "to" => params.to = None,
                _ => params.budget = None,
            }
            let response = call(service_with(nyc_hotels()), params).await;
            assert_eq!(
                response.status(),
                StatusCode::BAD_REQUEST,
                "missing {missing}"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_date_is_400() {
        let mut params = full_params();
        params.from = Some("01/01/2024".to_string());
        let response = call(service_with(nyc_hotels()), params).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_budget_is_400() {
        let mut params = full_params();
        params.budget = Some("lots".to_string());
        let response = call(service_with(nyc_hotels()), params).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_over_budget_is_404() {
        let mut params = full_params();
        params.budget = Some("250".to_string());
        let response = call(service_with(nyc_hotels()), params).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            error_status(&RecommendationError::Validation { field: "location" }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(&RecommendationError::NoOptionsAvailable),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_status(&RecommendationError::Availability(
                AvailabilityError::UpstreamStatus(500)
            )),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_response_wire_shape() {
        let body = RecommendationResponse {
            hotel_name: "HotelA".to_string(),
            total_cost: TotalCost {
                cost: 300,
                currency: "USD",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hotelName": "HotelA",
                "totalCost": { "cost": 300, "currency": "USD" }
            })
        );
    }
}
