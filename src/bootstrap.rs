use crate::api::AppState;
use crate::database::Database;
use crate::events::{EventBus, SystemEvent};
use crate::services::{
    EmployeeService, HolidayService, LeaveService, LeaveTypeService, OrganizationService,
    RegistrationService, TeamService,
};
use std::sync::Arc;

/// Wire up services around the database and event bus, and start the event
/// logging listener.
pub fn build_app_state(db: Database) -> AppState {
    let db = Arc::new(db);

    let event_bus = EventBus::new(100);
    tracing::info!("Event bus initialized with capacity 100");

    spawn_event_logger(&event_bus);

    AppState {
        registration_service: RegistrationService::new(db.clone()),
        organization_service: OrganizationService::new(db.clone()),
        employee_service: EmployeeService::new(db.clone()),
        team_service: TeamService::new(db.clone()),
        leave_type_service: LeaveTypeService::new(db.clone()),
        holiday_service: HolidayService::new(db.clone(), event_bus.clone()),
        leave_service: LeaveService::new(db, event_bus.clone()),
        event_bus,
    }
}

/// Subscribe a listener that records every domain event. Notification
/// delivery (mail, push) would hang off this same subscription.
fn spawn_event_logger(event_bus: &EventBus) {
    let mut receiver = event_bus.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            match event {
                SystemEvent::LeaveRequested {
                    leave_id,
                    employee_id,
                    duration,
                    ..
                } => {
                    tracing::info!(
                        "event: leave {} requested by employee {} for {} day(s)",
                        leave_id,
                        employee_id,
                        duration
                    );
                }
                SystemEvent::LeaveStatusChanged {
                    leave_id,
                    new_status,
                    decided_by,
                    ..
                } => {
                    tracing::info!(
                        "event: leave {} decided as {} by {}",
                        leave_id,
                        new_status,
                        decided_by
                    );
                }
                SystemEvent::HolidayCreated {
                    holiday_id,
                    date,
                    country_code,
                    ..
                } => {
                    tracing::info!(
                        "event: holiday {} added on {} ({})",
                        holiday_id,
                        date,
                        country_code
                    );
                }
            }
        }
    });
}
