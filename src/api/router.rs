use crate::api;
use crate::api::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration
        .route("/api/registration", post(api::registration::register))
        // Organization settings
        .route(
            "/api/organizations/:id",
            get(api::organizations::get_organization),
        )
        .route(
            "/api/organizations/:id",
            patch(api::organizations::update_organization),
        )
        // Employees
        .route(
            "/api/organizations/:id/employees",
            get(api::employees::list_employees),
        )
        .route("/api/employees/:id", get(api::employees::get_employee))
        .route("/api/employees/:id", patch(api::employees::update_employee))
        .route(
            "/api/employees/:id/balance",
            get(api::employees::get_balance),
        )
        // Teams
        .route("/api/organizations/:id/teams", post(api::teams::create_team))
        .route("/api/organizations/:id/teams", get(api::teams::list_teams))
        .route("/api/teams/:id", get(api::teams::get_team))
        .route("/api/teams/:id", patch(api::teams::update_team))
        .route("/api/teams/:id", delete(api::teams::delete_team))
        .route("/api/teams/:id/members", post(api::teams::add_team_member))
        .route("/api/teams/:id/members", get(api::teams::get_team_members))
        .route(
            "/api/teams/:id/members/:employee_id",
            delete(api::teams::remove_team_member),
        )
        // Leave types
        .route(
            "/api/organizations/:id/leave-types",
            post(api::leave_types::create_leave_type),
        )
        .route(
            "/api/organizations/:id/leave-types",
            get(api::leave_types::list_leave_types),
        )
        .route(
            "/api/leave-types/:id",
            get(api::leave_types::get_leave_type),
        )
        .route(
            "/api/leave-types/:id",
            patch(api::leave_types::update_leave_type),
        )
        .route(
            "/api/leave-types/:id",
            delete(api::leave_types::delete_leave_type),
        )
        // Holidays
        .route(
            "/api/organizations/:id/holidays",
            post(api::holidays::create_holiday),
        )
        .route(
            "/api/organizations/:id/holidays",
            get(api::holidays::list_holidays),
        )
        .route("/api/holidays/:id", get(api::holidays::get_holiday))
        .route("/api/holidays/:id", patch(api::holidays::update_holiday))
        .route("/api/holidays/:id", delete(api::holidays::delete_holiday))
        // Leave requests
        .route("/api/leaves", post(api::leaves::create_leave))
        .route(
            "/api/organizations/:id/leaves",
            get(api::leaves::list_leaves),
        )
        .route("/api/leaves/:id", get(api::leaves::get_leave))
        .route(
            "/api/leaves/:id/status",
            patch(api::leaves::update_leave_status),
        )
        .route(
            "/api/organizations/:id/calendar",
            get(api::leaves::month_calendar),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
