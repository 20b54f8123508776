use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    domain::working_days::weekday_from_name,
    models::Organization,
    utils::validation::{validate_and_normalize_country, validate_timezone},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct OrganizationService {
    db: Arc<Database>,
}

impl OrganizationService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn get_organization(&self, organization_id: &str) -> ApiResult<Organization> {
        self.db
            .get_organization_by_id(organization_id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Organization {} not found", organization_id))
            })
    }

    /// Settings update. The weekend set must name real weekdays and leave at
    /// least one working day in the week, otherwise every date-advancing
    /// operation downstream would fail.
    pub async fn update_organization(
        &self,
        organization_id: &str,
        name: Option<&str>,
        country_code: Option<&str>,
        timezone: Option<&str>,
        weekend_days: Option<&[String]>,
    ) -> ApiResult<Organization> {
        let normalized_country = match country_code {
            Some(code) => Some(validate_and_normalize_country(code)?),
            None => None,
        };
        if let Some(tz) = timezone {
            validate_timezone(tz)?;
        }

        let weekend_json = match weekend_days {
            Some(days) => {
                for day in days {
                    weekday_from_name(day)
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                }
                if days.len() >= 7 {
                    return Err(ApiError::BadRequest(
                        "Weekend configuration must leave at least one working day".to_string(),
                    ));
                }
                Some(serde_json::to_string(days).map_err(|e| {
                    ApiError::Internal(format!("Failed to encode weekend days: {}", e))
                })?)
            }
            None => None,
        };

        self.db
            .update_organization(
                organization_id,
                name,
                normalized_country.as_deref(),
                timezone,
                weekend_json.as_deref(),
            )
            .await?;

        info!("Updated organization {}", organization_id);
        self.get_organization(organization_id).await
    }
}
