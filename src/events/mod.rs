use crate::models::LeaveStatus;
use tokio::sync::broadcast;

/// Domain events published by the services
#[derive(Debug, Clone)]
pub enum SystemEvent {
    LeaveRequested {
        leave_id: String,
        employee_id: String,
        leave_type_id: String,
        start_date: String, // YYYY-MM-DD
        end_date: String,   // YYYY-MM-DD
        duration: i64,
        timestamp: String, // ISO 8601
    },
    LeaveStatusChanged {
        leave_id: String,
        employee_id: String,
        old_status: LeaveStatus,
        new_status: LeaveStatus,
        decided_by: String,
        timestamp: String, // ISO 8601
    },
    HolidayCreated {
        holiday_id: String,
        date: String, // YYYY-MM-DD
        country_code: String,
        timestamp: String, // ISO 8601
    },
}

/// Event bus for publishing and subscribing to system events
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SystemEvent>,
}

impl EventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish an event to all subscribers. Returns the number of receivers
    /// the event reached; errors when no subscriber is active.
    pub fn publish(
        &self,
        event: SystemEvent,
    ) -> Result<usize, broadcast::error::SendError<SystemEvent>> {
        self.tx.send(event)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<SystemEvent> {
        self.tx.subscribe()
    }
}
