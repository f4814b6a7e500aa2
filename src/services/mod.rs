pub mod http;
pub mod auth_service;
pub mod dashboard_service;

pub use http::{GlooTransport, HttpResponse, HttpTransport, TransportError};
pub use auth_service::{AuthClient, AuthError};
pub use dashboard_service::{DashboardClient, DashboardError, GatheredResponses};
