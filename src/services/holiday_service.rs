use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    events::{EventBus, SystemEvent},
    models::{Holiday, Organization},
    utils::validation::{parse_date, validate_and_normalize_country},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct HolidayService {
    db: Arc<Database>,
    event_bus: EventBus,
}

impl HolidayService {
    pub fn new(db: Arc<Database>, event_bus: EventBus) -> Self {
        Self { db, event_bus }
    }

    pub async fn create_holiday(
        &self,
        organization_id: &str,
        name: String,
        date: String,
        country_code: String,
    ) -> ApiResult<Holiday> {
        self.get_organization(organization_id).await?;

        // Reject malformed dates up front; the stored TEXT form is compared
        // lexicographically everywhere else
        parse_date("date", &date)?;
        let country_code = validate_and_normalize_country(&country_code)?;

        let holiday = Holiday::new(organization_id.to_string(), name, date, country_code);
        self.db.create_holiday(&holiday).await?;

        let now = chrono::Utc::now().to_rfc3339();
        self.publish_event(SystemEvent::HolidayCreated {
            holiday_id: holiday.id.clone(),
            date: holiday.date.clone(),
            country_code: holiday.country_code.clone(),
            timestamp: now,
        });

        info!(
            "Created holiday: {} on {} ({})",
            holiday.name, holiday.date, holiday.country_code
        );
        Ok(holiday)
    }

    pub async fn get_holiday(&self, holiday_id: &str) -> ApiResult<Holiday> {
        self.db
            .get_holiday(holiday_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", holiday_id)))
    }

    /// Holiday set for one year and country; the country defaults to the
    /// organization's own when not given
    pub async fn list_holidays(
        &self,
        organization_id: &str,
        year: i32,
        country_code: Option<&str>,
    ) -> ApiResult<Vec<Holiday>> {
        let organization = self.get_organization(organization_id).await?;
        let country = match country_code {
            Some(code) => validate_and_normalize_country(code)?,
            None => organization.country_code,
        };

        self.db.list_holidays(organization_id, year, &country).await
    }

    pub async fn update_holiday(
        &self,
        holiday_id: &str,
        name: Option<&str>,
        date: Option<&str>,
        country_code: Option<&str>,
    ) -> ApiResult<Holiday> {
        if let Some(date) = date {
            parse_date("date", date)?;
        }
        let normalized = match country_code {
            Some(code) => Some(validate_and_normalize_country(code)?),
            None => None,
        };

        self.db
            .update_holiday(holiday_id, name, date, normalized.as_deref())
            .await?;

        info!("Updated holiday {}", holiday_id);
        self.get_holiday(holiday_id).await
    }

    pub async fn delete_holiday(&self, holiday_id: &str) -> ApiResult<()> {
        self.db.delete_holiday(holiday_id).await?;
        info!("Deleted holiday {}", holiday_id);
        Ok(())
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
            tracing::error!("Failed to publish holiday event: {}", e);
        }
    }
}
