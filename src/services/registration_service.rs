use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{Employee, Organization, RegistrationRequest},
    utils::validation::{validate_and_normalize_country, validate_and_normalize_email, validate_timezone},
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, ParamsBuilder,
};
use std::sync::Arc;
use tracing::info;

const DEFAULT_TIMEZONE: &str = "UTC";

/// Sign-up flow: creates an organization together with its first employee
/// account
#[derive(Clone)]
pub struct RegistrationService {
    db: Arc<Database>,
}

impl RegistrationService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> ApiResult<(Organization, Employee)> {
        if request.organization_name.trim().len() < 2 {
            return Err(ApiError::BadRequest(
                "Organization name must be at least 2 characters".to_string(),
            ));
        }
        if request.first_name.trim().len() < 2 || request.last_name.trim().len() < 2 {
            return Err(ApiError::BadRequest(
                "First and last name must be at least 2 characters".to_string(),
            ));
        }

        let email = validate_and_normalize_email(&request.email)?;
        validate_password(&request.password)?;
        let country_code = validate_and_normalize_country(&request.country_code)?;
        let timezone = match request.timezone.as_deref() {
            Some(tz) => validate_timezone(tz)?,
            None => DEFAULT_TIMEZONE.to_string(),
        };

        let organization = Organization::new(
            request.organization_name.trim().to_string(),
            country_code,
            timezone.clone(),
        );
        self.db.create_organization(&organization).await?;

        let password_hash = hash_password(&request.password)?;
        let mut employee = Employee::new(
            organization.id.clone(),
            email,
            password_hash,
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            timezone,
        );
        employee.phone = request.phone;
        self.db.create_employee(&employee).await?;

        info!(
            "Registered organization {} ({}) with first employee {}",
            organization.name, organization.id, employee.id
        );

        Ok((organization, employee))
    }
}

/// Minimum length check matching the sign-up form contract
pub fn validate_password(password: &str) -> ApiResult<()> {
    if password.len() < 8 {
        return Err(ApiError::BadRequest(
            "Password must be over 8 characters".to_string(),
        ));
    }
    if password.len() > 72 {
        return Err(ApiError::BadRequest(
            "Password must be at most 72 characters".to_string(),
        ));
    }
    Ok(())
}

/// Hash a password with Argon2id:
/// - m_cost = 19 MiB
/// - t_cost = 2 iterations
/// - p_cost = 1 thread
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(19456) // 19 MiB
        .t_cost(2) // 2 iterations
        .p_cost(1) // 1 thread
        .build()
        .map_err(|_| ApiError::Internal("Failed to build Argon2 params".to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::Internal(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}
