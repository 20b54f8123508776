pub mod middleware;

pub mod employees;
pub mod holidays;
pub mod leave_types;
pub mod leaves;
pub mod organizations;
pub mod registration;
pub mod router;
pub mod teams;

pub use middleware::*;

use crate::events::EventBus;
use crate::services::{
    EmployeeService, HolidayService, LeaveService, LeaveTypeService, OrganizationService,
    RegistrationService, TeamService,
};

#[derive(Clone)]
pub struct AppState {
    pub event_bus: EventBus,
    pub registration_service: RegistrationService,
    pub organization_service: OrganizationService,
    pub employee_service: EmployeeService,
    pub team_service: TeamService,
    pub leave_type_service: LeaveTypeService,
    pub holiday_service: HolidayService,
    pub leave_service: LeaveService,
}
