pub mod auth;
pub mod dashboard;

pub use auth::{ClaimsError, Credentials, ErrorBody, TokenResponse, UnverifiedClaims};
pub use dashboard::{Badge, BadgeAward, DashboardData, LeaderboardEntry, Project};
