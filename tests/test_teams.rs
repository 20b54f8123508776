mod helpers;

use helpers::*;
use leavedesk::models::*;
use leavedesk::ApiError;

#[tokio::test]
async fn test_create_and_list_teams() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let service = team_service(&db);

    let team = service
        .create_team(Team::new(
            org.id.clone(),
            "Backend".to_string(),
            Some("Server team".to_string()),
        ))
        .await
        .unwrap();

    service
        .create_team(Team::new(org.id.clone(), "Design".to_string(), None))
        .await
        .unwrap();

    let teams = service.list_teams(&org.id).await.unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].name, "Backend");

    let fetched = service.get_team(&team.id).await.unwrap();
    assert_eq!(fetched.description.as_deref(), Some("Server team"));
}

#[tokio::test]
async fn test_duplicate_team_name_conflicts() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let service = team_service(&db);

    service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap();

    let err = service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn test_team_membership_roundtrip() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let employee = create_test_employee(&db, &org, "jane@acme.test").await;
    let service = team_service(&db);

    let team = service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap();

    service.add_member(&team.id, &employee.id).await.unwrap();
    assert!(service.is_member(&team.id, &employee.id).await.unwrap());

    let members = service.get_members(&team.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, employee.id);

    service.remove_member(&team.id, &employee.id).await.unwrap();
    assert!(!service.is_member(&team.id, &employee.id).await.unwrap());
}

#[tokio::test]
async fn test_adding_a_member_twice_conflicts() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let employee = create_test_employee(&db, &org, "jane@acme.test").await;
    let service = team_service(&db);

    let team = service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap();

    service.add_member(&team.id, &employee.id).await.unwrap();
    let err = service.add_member(&team.id, &employee.id).await.unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
async fn test_member_from_other_organization_is_rejected() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let service = team_service(&db);

    let other_org = Organization::new("Other Corp".to_string(), "US".to_string(), "UTC".to_string());
    db.create_organization(&other_org).await.unwrap();
    let outsider = create_test_employee(&db, &other_org, "out@other.test").await;

    let team = service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap();

    let err = service.add_member(&team.id, &outsider.id).await.unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[tokio::test]
async fn test_rename_and_delete_team() {
    let db = setup_test_db().await;
    let org = create_test_org(&db).await;
    let service = team_service(&db);

    let team = service
        .create_team(Team::new(org.id.clone(), "Backend".to_string(), None))
        .await
        .unwrap();

    let renamed = service
        .update_team(&team.id, Some("Platform"), None)
        .await
        .unwrap();
    assert_eq!(renamed.name, "Platform");

    service.delete_team(&team.id).await.unwrap();
    let err = service.get_team(&team.id).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}
