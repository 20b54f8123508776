use crate::api::middleware::error::{ApiError, ApiResult};

pub fn validate_and_normalize_email(email: &str) -> ApiResult<String> {
    let trimmed = email.trim();

    if !email_address::EmailAddress::is_valid(trimmed) {
        return Err(ApiError::BadRequest(
            "Invalid email format. Must be in format user@domain.tld".to_string(),
        ));
    }

    // Require a TLD: bare hostnames pass the syntax check but are never what a
    // registrant meant
    if let Some(at_pos) = trimmed.find('@') {
        let domain_part = &trimmed[at_pos + 1..];
        if !domain_part.contains('.') {
            return Err(ApiError::BadRequest(
                "Invalid email format. Domain must include a TLD (e.g., .com, .org)".to_string(),
            ));
        }
    }

    Ok(trimmed.to_lowercase())
}

/// ISO 3166-1 alpha-2 country code, normalized to uppercase
pub fn validate_and_normalize_country(code: &str) -> ApiResult<String> {
    let trimmed = code.trim();
    if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ApiError::BadRequest(format!(
            "Invalid country code '{}'. Expected a two-letter ISO code (e.g., DE, US)",
            code
        )));
    }
    Ok(trimmed.to_uppercase())
}

/// IANA timezone identifier, checked against the tz database
pub fn validate_timezone(timezone: &str) -> ApiResult<String> {
    let trimmed = timezone.trim();
    trimmed
        .parse::<chrono_tz::Tz>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid timezone: {}", timezone)))?;
    Ok(trimmed.to_string())
}

/// `YYYY-MM-DD` date field as submitted by clients
pub fn parse_date(field: &str, value: &str) -> ApiResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Invalid {}: expected YYYY-MM-DD, got '{}'", field, value)))
}
