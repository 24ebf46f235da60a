//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod exercises;
pub mod extractors;
pub mod health;
pub mod landing;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the API handlers and their extractor configuration.
///
/// Mount under `/api`:
/// ```
/// use actix_web::{App, web};
/// use exercise_tracker::inbound::http::api_routes;
///
/// let app = App::new().service(web::scope("/api").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(extractors::json_config())
        .app_data(extractors::form_config())
        .app_data(extractors::query_config())
        .app_data(extractors::path_config())
        .service(users::create_user)
        .service(users::list_users)
        .service(exercises::add_exercise)
        .service(exercises::exercise_log);
}
