pub mod employee_service;
pub mod holiday_service;
pub mod leave_service;
pub mod leave_type_service;
pub mod organization_service;
pub mod registration_service;
pub mod team_service;

pub use employee_service::*;
pub use holiday_service::*;
pub use leave_service::*;
pub use leave_type_service::*;
pub use organization_service::*;
pub use registration_service::*;
pub use team_service::*;
