use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub country_code: String,
    pub timezone: String,
    pub weekend_days: String, // JSON array of weekday names, e.g. ["Saturday","Sunday"]
    pub created_at: String,
    pub updated_at: String,
}

impl Organization {
    pub fn new(name: String, country_code: String, timezone: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            country_code,
            timezone,
            weekend_days: r#"["Saturday","Sunday"]"#.to_string(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Parse the stored weekend configuration.
    pub fn weekend_day_names(&self) -> Result<Vec<String>, String> {
        serde_json::from_str::<Vec<String>>(&self.weekend_days)
            .map_err(|e| format!("Invalid weekend days format: {}", e))
    }
}

/// DTO for updating organization settings
#[derive(Debug, Deserialize)]
pub struct UpdateOrganizationRequest {
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub timezone: Option<String>,
    pub weekend_days: Option<Vec<String>>,
}
