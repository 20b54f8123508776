use leavedesk::database::Database;
use leavedesk::events::EventBus;
use leavedesk::models::*;
use leavedesk::services::*;
use std::sync::Arc;

pub async fn create_test_org(db: &Database) -> Organization {
    let org = Organization::new(
        "Acme GmbH".to_string(),
        "DE".to_string(),
        "Europe/Berlin".to_string(),
    );
    db.create_organization(&org).await.unwrap();
    org
}

pub async fn create_test_employee(db: &Database, org: &Organization, email: &str) -> Employee {
    let employee = Employee::new(
        org.id.clone(),
        email.to_string(),
        "$argon2id$test-hash".to_string(),
        "Jane".to_string(),
        "Doe".to_string(),
        org.timezone.clone(),
    );
    db.create_employee(&employee).await.unwrap();
    employee
}

pub async fn create_test_leave_type(
    db: &Database,
    org: &Organization,
    name: &str,
    cycle: LeaveCycle,
    amount: i64,
) -> LeaveType {
    let leave_type = LeaveType::new(org.id.clone(), name.to_string(), cycle, amount);
    db.create_leave_type(&leave_type).await.unwrap();
    leave_type
}

pub async fn create_test_holiday(
    db: &Database,
    org: &Organization,
    name: &str,
    date: &str,
    country_code: &str,
) -> Holiday {
    let holiday = Holiday::new(
        org.id.clone(),
        name.to_string(),
        date.to_string(),
        country_code.to_string(),
    );
    db.create_holiday(&holiday).await.unwrap();
    holiday
}

pub fn leave_service(db: &Database) -> LeaveService {
    LeaveService::new(Arc::new(db.clone()), EventBus::new(16))
}

pub fn holiday_service(db: &Database) -> HolidayService {
    HolidayService::new(Arc::new(db.clone()), EventBus::new(16))
}

pub fn team_service(db: &Database) -> TeamService {
    TeamService::new(Arc::new(db.clone()))
}

pub fn leave_type_service(db: &Database) -> LeaveTypeService {
    LeaveTypeService::new(Arc::new(db.clone()))
}

pub fn employee_service(db: &Database) -> EmployeeService {
    EmployeeService::new(Arc::new(db.clone()))
}

pub fn registration_service(db: &Database) -> RegistrationService {
    RegistrationService::new(Arc::new(db.clone()))
}

pub fn organization_service(db: &Database) -> OrganizationService {
    OrganizationService::new(Arc::new(db.clone()))
}

/// Shorthand for submitting a request through the service
pub async fn submit_leave(
    db: &Database,
    employee: &Employee,
    leave_type: &LeaveType,
    start: &str,
    end: &str,
) -> LeaveRequest {
    leave_service(db)
        .create_request(CreateLeaveRequest {
            employee_id: employee.id.clone(),
            leave_type_id: leave_type.id.clone(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            reason: None,
        })
        .await
        .unwrap()
}
