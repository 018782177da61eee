// Recommendation engine: validates trip parameters, pulls availability and
// picks the cheapest option whose total trip price fits the budget.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::availability::{AvailabilityError, AvailabilityGetter, HotelOption};
use crate::money::Money;

/// The selected best-fit hotel for a specific trip and budget.
/// `trip_price` is the total for the stay, not the per-night rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub trip_start: NaiveDate,
    pub trip_end: NaiveDate,
    pub location: String,
    pub hotel_name: String,
    pub trip_price: Money,
}

#[derive(Error, Debug)]
pub enum RecommendationError {
    /// Bad or missing input; the caller must fix the request.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// The upstream availability call failed; the caller may retry.
    #[error("failed to get availability: {0}")]
    Availability(#[from] AvailabilityError),

    /// Nothing fits the budget; retrying without changing it is pointless.
    #[error("no options available")]
    NoOptionsAvailable,
}

/// Stateless engine over an injected availability source. Holds no mutable
/// state, so one instance serves concurrent requests without locking.
pub struct RecommendationService<A> {
    availability: A,
}

impl<A: AvailabilityGetter> RecommendationService<A> {
    pub fn new(availability: A) -> Self {
        Self { availability }
    }

    /// Recommend the cheapest hotel for the trip within `budget`.
    ///
    /// Unset dates and an empty location fail validation before any upstream
    /// call. Dates arrive as `Option` because the inbound parameters are
    /// optional at the transport layer; validation is owned here so every
    /// caller gets the same contract.
    pub async fn get(
        &self,
        trip_start: Option<NaiveDate>,
        trip_end: Option<NaiveDate>,
        location: &str,
        budget: Money,
    ) -> Result<Recommendation, RecommendationError> {
        let trip_start = trip_start.ok_or(RecommendationError::Validation { field: "tripStart" })?;
        let trip_end = trip_end.ok_or(RecommendationError::Validation { field: "tripEnd" })?;
        if location.is_empty() {
            return Err(RecommendationError::Validation { field: "location" });
        }

        let options = self
            .availability
            .get_availability(trip_start, trip_end, location)
            .await?;

        // Whole-day difference between the dates. A reversed range yields a
        // negative night count and therefore non-positive totals; those are
        // deliberately not rejected, matching the existing contract.
        let nights = (trip_end - trip_start).num_days();

        let mut best: Option<(Money, HotelOption)> = None;
        for option in options {
            let total = option.price_per_night.multiply(nights);
            if total > budget {
                continue;
            }
            // Strict less-than keeps the first-seen option on ties.
            match &best {
                Some((lowest, _)) if total >= *lowest => {}
                _ => best = Some((total, option)),
            }
        }

        let (trip_price, winner) = best.ok_or(RecommendationError::NoOptionsAvailable)?;
        info!(
            location,
            hotel = %winner.hotel_name,
            nights,
            total = %trip_price,
            "selected recommendation"
        );

        Ok(Recommendation {
            trip_start,
            trip_end,
            location: location.to_string(),
            hotel_name: winner.hotel_name,
            trip_price,
        })
    }
}
