use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    domain::working_days::WorkingCalendar,
    events::{EventBus, SystemEvent},
    models::*,
    utils::validation::parse_date,
};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tracing::info;

/// Service for leave requests: submission, approval workflow, balances and
/// the month calendar view
#[derive(Clone)]
pub struct LeaveService {
    db: Arc<Database>,
    event_bus: EventBus,
}

impl LeaveService {
    pub fn new(db: Arc<Database>, event_bus: EventBus) -> Self {
        Self { db, event_bus }
    }

    // ========================================
    // Request Submission
    // ========================================

    /// Submit a leave request.
    ///
    /// The requested dates are normalized before the duration is derived:
    /// a start on a weekend day or holiday is advanced to the next working
    /// day, and an end date lying before the (possibly advanced) start is
    /// clamped to it. The stored request carries the normalized dates, and
    /// the response returns them to the caller.
    pub async fn create_request(&self, request: CreateLeaveRequest) -> ApiResult<LeaveRequest> {
        let employee = self.get_employee(&request.employee_id).await?;
        let organization = self.get_organization(&employee.organization_id).await?;

        let leave_type = self
            .db
            .get_leave_type_by_id(&request.leave_type_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Leave type {} not found", request.leave_type_id))
            })?;
        if leave_type.organization_id != organization.id {
            return Err(ApiError::BadRequest(
                "Leave type belongs to a different organization".to_string(),
            ));
        }

        let start = parse_date("start_date", &request.start_date)?;
        let end = parse_date("end_date", &request.end_date)?;

        let calendar = self
            .working_calendar_for(&organization, &employee, start, end)
            .await?;

        let start = calendar.next_working_day(start)?;
        let end = if end < start { start } else { end };
        let duration = calendar.duration_in_days(start, end);

        let leave = LeaveRequest::new(
            organization.id.clone(),
            employee.id.clone(),
            leave_type.id.clone(),
            format_date(start),
            format_date(end),
            duration,
            request.reason,
        );
        self.db.create_leave_request(&leave).await?;

        self.publish_event(SystemEvent::LeaveRequested {
            leave_id: leave.id.clone(),
            employee_id: leave.employee_id.clone(),
            leave_type_id: leave.leave_type_id.clone(),
            start_date: leave.start_date.clone(),
            end_date: leave.end_date.clone(),
            duration: leave.duration,
            timestamp: chrono::Utc::now().to_rfc3339(),
        });

        info!(
            "Leave request {} created for employee {} ({} to {}, {} day(s))",
            leave.id, leave.employee_id, leave.start_date, leave.end_date, leave.duration
        );
        Ok(leave)
    }

    pub async fn get_request(&self, leave_id: &str) -> ApiResult<LeaveRequest> {
        self.db
            .get_leave_request_by_id(leave_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Leave request {} not found", leave_id)))
    }

    pub async fn list_requests(
        &self,
        organization_id: &str,
        status_filter: Option<LeaveStatus>,
        employee_filter: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<LeaveRequest>, i64)> {
        self.db
            .list_leave_requests(organization_id, status_filter, employee_filter, limit, offset)
            .await
    }

    // ========================================
    // Approval Workflow
    // ========================================

    /// Accept or deny a pending request. Requests that have already been
    /// decided are not reopened.
    pub async fn decide_request(
        &self,
        leave_id: &str,
        status: LeaveStatus,
        decided_by: &str,
    ) -> ApiResult<LeaveRequest> {
        if status == LeaveStatus::Pending {
            return Err(ApiError::BadRequest(
                "Decision status must be 'accepted' or 'denied'".to_string(),
            ));
        }

        let leave = self.get_request(leave_id).await?;
        if leave.status != LeaveStatus::Pending {
            return Err(ApiError::Conflict(format!(
                "Leave request {} is already {}",
                leave_id, leave.status
            )));
        }

        let decider = self.get_employee(decided_by).await?;
        if decider.organization_id != leave.organization_id {
            return Err(ApiError::BadRequest(
                "Deciding employee belongs to a different organization".to_string(),
            ));
        }

        let decided_at = chrono::Utc::now().to_rfc3339();
        self.db
            .update_leave_status(leave_id, status, decided_by, &decided_at)
            .await?;

        self.publish_event(SystemEvent::LeaveStatusChanged {
            leave_id: leave_id.to_string(),
            employee_id: leave.employee_id.clone(),
            old_status: LeaveStatus::Pending,
            new_status: status,
            decided_by: decided_by.to_string(),
            timestamp: decided_at,
        });

        info!("Leave request {} {} by {}", leave_id, status, decided_by);
        self.get_request(leave_id).await
    }

    // ========================================
    // Balances
    // ========================================

    /// Remaining entitlement per leave type for the cycle window containing
    /// `as_of`. Accepted requests count as used; pending ones are reported
    /// alongside without reducing the remainder.
    pub async fn balance(&self, employee_id: &str, as_of: NaiveDate) -> ApiResult<BalanceResponse> {
        let employee = self.get_employee(employee_id).await?;
        let leave_types = self.db.list_leave_types(&employee.organization_id).await?;

        let mut balances = Vec::new();
        for leave_type in leave_types {
            let (window_start, window_end) = cycle_window(leave_type.cycle, as_of);

            let used = self
                .sum_durations(employee_id, &leave_type.id, LeaveStatus::Accepted, window_start, window_end)
                .await?;
            let pending = self
                .sum_durations(employee_id, &leave_type.id, LeaveStatus::Pending, window_start, window_end)
                .await?;

            let entitlement = leave_type.amount;
            balances.push(LeaveBalance {
                entitlement,
                used,
                pending,
                remaining: entitlement - used,
                leave_type,
            });
        }

        Ok(BalanceResponse {
            employee_id: employee_id.to_string(),
            as_of: format_date(as_of),
            balances,
        })
    }

    // ========================================
    // Calendar View
    // ========================================

    /// Month view for the calendar grid: every pending or accepted request
    /// overlapping the month, plus the month's holidays for the
    /// organization's country.
    pub async fn month_calendar(
        &self,
        organization_id: &str,
        year: i32,
        month: u32,
    ) -> ApiResult<MonthCalendarResponse> {
        let organization = self.get_organization(organization_id).await?;

        let (month_start, month_end) = month_bounds(year, month)
            .ok_or_else(|| ApiError::BadRequest(format!("Invalid month: {}-{}", year, month)))?;
        let start = format_date(month_start);
        let end = format_date(month_end);

        let leaves = self
            .db
            .list_leaves_overlapping(organization_id, &start, &end)
            .await?;
        let holidays = self
            .db
            .list_holidays_in_range(organization_id, &organization.country_code, &start, &end)
            .await?;

        Ok(MonthCalendarResponse {
            year,
            month,
            leaves,
            holidays,
        })
    }

    // ========================================
    // Helper Methods
    // ========================================

    /// Build the working-day calendar covering a request. The holiday range
    /// extends a full scan window past the start date so that advancing the
    /// start can never run off the loaded set.
    async fn working_calendar_for(
        &self,
        organization: &Organization,
        employee: &Employee,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<WorkingCalendar> {
        let weekend_names = organization
            .weekend_day_names()
            .map_err(ApiError::Internal)?;

        let country = employee
            .country_code
            .as_deref()
            .unwrap_or(&organization.country_code);

        let range_end = std::cmp::max(end, start + Duration::days(366));
        let holidays = self
            .db
            .list_holidays_in_range(
                &organization.id,
                country,
                &format_date(start),
                &format_date(range_end),
            )
            .await?;

        let mut dates = Vec::with_capacity(holidays.len());
        for holiday in &holidays {
            // Stored dates are validated at write time; a malformed one here
            // means the data itself is corrupt
            dates.push(parse_date("holiday date", &holiday.date).map_err(|e| {
                ApiError::Internal(format!("Stored holiday {} is invalid: {}", holiday.id, e))
            })?);
        }

        Ok(WorkingCalendar::from_day_names(dates, &weekend_names)?)
    }

    async fn sum_durations(
        &self,
        employee_id: &str,
        leave_type_id: &str,
        status: LeaveStatus,
        window_start: NaiveDate,
        window_end: NaiveDate,
    ) -> ApiResult<i64> {
        let leaves = self
            .db
            .list_leaves_in_window(
                employee_id,
                leave_type_id,
                status,
                &format_date(window_start),
                &format_date(window_end),
            )
            .await?;

        Ok(leaves.iter().map(|l| l.duration).sum())
    }

    async fn get_employee(&self, employee_id: &str) -> ApiResult<Employee> {
        self.db
            .get_employee_by_id(employee_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Employee {} not found", employee_id)))
    }

    async fn get_organization(&self, organization_id: &str) -> ApiResult<Organization> {
        self.db
            .get_organization_by_id(organization_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Organization {} not found", organization_id))
            })
    }

    fn publish_event(&self, event: SystemEvent) {
        if let Err(e) = self.event_bus.publish(event) {
            tracing::error!("Failed to publish leave event: {}", e);
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Calendar-aligned entitlement window containing `as_of`
fn cycle_window(cycle: LeaveCycle, as_of: NaiveDate) -> (NaiveDate, NaiveDate) {
    use chrono::Datelike;

    match cycle {
        LeaveCycle::Monthly => {
            let bounds = month_bounds(as_of.year(), as_of.month());
            // as_of is a valid date, so its month always has bounds
            bounds.unwrap_or((as_of, as_of))
        }
        LeaveCycle::Yearly => {
            let start = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).unwrap_or(as_of);
            let end = NaiveDate::from_ymd_opt(as_of.year(), 12, 31).unwrap_or(as_of);
            (start, end)
        }
    }
}

/// First and last day of a month, or None for an out-of-range month number
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next_month - Duration::days(1)))
}
