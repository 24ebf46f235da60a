//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::{
    MockExerciseCommand, MockExerciseLogQuery, MockUsersCommand, MockUsersQuery,
};
use crate::inbound::http::api_routes;
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; any port left at its default rejects every call.
#[derive(Default)]
pub struct MockPorts {
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub exercises: MockExerciseCommand,
    pub exercise_log: MockExerciseLogQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.users),
            Arc::new(self.users_query),
            Arc::new(self.exercises),
            Arc::new(self.exercise_log),
        )
    }
}

/// Build an app exposing the `/api` scope over the given mocks.
pub fn test_app(
    ports: MockPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(web::scope("/api").configure(api_routes))
}
