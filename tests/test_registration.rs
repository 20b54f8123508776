mod helpers;

use helpers::*;
use leavedesk::models::RegistrationRequest;
use leavedesk::ApiError;

fn request() -> RegistrationRequest {
    RegistrationRequest {
        organization_name: "Acme GmbH".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "Jane.Doe@Acme.test".to_string(),
        password: "correct-horse-battery".to_string(),
        phone: Some("+49 30 1234567".to_string()),
        country_code: "de".to_string(),
        timezone: Some("Europe/Berlin".to_string()),
    }
}

#[tokio::test]
async fn test_registration_creates_organization_and_first_employee() {
    let db = setup_test_db().await;

    let (org, employee) = registration_service(&db).register(request()).await.unwrap();

    assert_eq!(org.name, "Acme GmbH");
    assert_eq!(org.country_code, "DE");
    assert_eq!(org.weekend_day_names().unwrap(), vec!["Saturday", "Sunday"]);

    assert_eq!(employee.organization_id, org.id);
    assert_eq!(employee.email, "jane.doe@acme.test");
    assert_eq!(employee.timezone, "Europe/Berlin");

    // The password is stored as an Argon2 hash, never verbatim
    assert!(employee.password_hash.starts_with("$argon2id$"));

    let stored = db.get_employee_by_id(&employee.id).await.unwrap().unwrap();
    assert_eq!(stored.email, employee.email);
}

#[tokio::test]
async fn test_registration_rejects_invalid_email() {
    let db = setup_test_db().await;

    let mut req = request();
    req.email = "not-an-email".to_string();

    let err = registration_service(&db).register(req).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn test_registration_rejects_short_password() {
    let db = setup_test_db().await;

    let mut req = request();
    req.password = "short".to_string();

    let err = registration_service(&db).register(req).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn test_registration_rejects_unknown_timezone() {
    let db = setup_test_db().await;

    let mut req = request();
    req.timezone = Some("Mars/Olympus".to_string());

    let err = registration_service(&db).register(req).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn test_registration_defaults_timezone_to_utc() {
    let db = setup_test_db().await;

    let mut req = request();
    req.timezone = None;

    let (org, employee) = registration_service(&db).register(req).await.unwrap();
    assert_eq!(org.timezone, "UTC");
    assert_eq!(employee.timezone, "UTC");
}

#[tokio::test]
async fn test_duplicate_email_within_organization_conflicts() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    create_test_employee(&db, &org, "jane@acme.test").await;

    let duplicate = leavedesk::models::Employee::new(
        org.id.clone(),
        "jane@acme.test".to_string(),
        "$argon2id$other-hash".to_string(),
        "Janet".to_string(),
        "Doe".to_string(),
        org.timezone.clone(),
    );

    let err = db.create_employee(&duplicate).await.unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn test_profile_update_preserves_unset_fields() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let employee = create_test_employee(&db, &org, "jane@acme.test").await;

    let updated = employee_service(&db)
        .update_profile(
            &employee.id,
            leavedesk::models::UpdateEmployeeRequest {
                first_name: None,
                last_name: Some("Miller".to_string()),
                phone: Some("+49 30 7654321".to_string()),
                country_code: Some("at".to_string()),
                timezone: None,
                avatar_url: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.last_name, "Miller");
    assert_eq!(updated.phone.as_deref(), Some("+49 30 7654321"));
    assert_eq!(updated.country_code.as_deref(), Some("AT"));
    assert_eq!(updated.timezone, "Europe/Berlin");
}
