// Trip hotel recommendation service: queries the partner availability feed
// and picks the cheapest hotel whose total trip price fits the budget.

pub mod availability;
pub mod config;
pub mod money;
pub mod recommendation;
pub mod server;

// Re-export key types for convenience
pub use availability::{
    AvailabilityError, AvailabilityGetter, ClientError, HotelOption, PartnershipClient,
};
pub use money::{Currency, Money};
pub use recommendation::{Recommendation, RecommendationError, RecommendationService};
