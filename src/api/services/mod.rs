pub mod bookmarks;
pub mod frontend;
pub mod health;

pub use bookmarks::routes::api_v1_routes;
pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService, health_routes};
