use leavedesk::database::Database;

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    use uuid::Uuid;
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE organizations (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            country_code TEXT NOT NULL,
            timezone TEXT NOT NULL,
            weekend_days TEXT NOT NULL DEFAULT '[\"Saturday\",\"Sunday\"]',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create organizations table");

    sqlx::query(
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            phone TEXT,
            country_code TEXT,
            timezone TEXT NOT NULL,
            avatar_url TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(organization_id, email),
            FOREIGN KEY (organization_id) REFERENCES organizations(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employees table");

    sqlx::query(
        "CREATE TABLE teams (
            id TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(organization_id, name),
            FOREIGN KEY (organization_id) REFERENCES organizations(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create teams table");

    sqlx::query(
        "CREATE TABLE team_members (
            id TEXT PRIMARY KEY,
            team_id TEXT NOT NULL,
            employee_id TEXT NOT NULL,
            joined_at TEXT NOT NULL,
            UNIQUE(team_id, employee_id),
            FOREIGN KEY (team_id) REFERENCES teams(id) ON DELETE CASCADE,
            FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create team_members table");

    sqlx::query(
        "CREATE TABLE leave_types (
            id TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            name TEXT NOT NULL,
            cycle TEXT NOT NULL CHECK(cycle IN ('monthly', 'yearly')),
            amount INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(organization_id, name),
            FOREIGN KEY (organization_id) REFERENCES organizations(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create leave_types table");

    sqlx::query(
        "CREATE TABLE leave_requests (
            id TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            employee_id TEXT NOT NULL,
            leave_type_id TEXT NOT NULL,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            duration INTEGER NOT NULL,
            reason TEXT,
            status TEXT NOT NULL DEFAULT 'pending' CHECK(status IN ('pending', 'accepted', 'denied')),
            decided_by TEXT,
            decided_at TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (organization_id) REFERENCES organizations(id) ON DELETE CASCADE,
            FOREIGN KEY (employee_id) REFERENCES employees(id) ON DELETE CASCADE,
            FOREIGN KEY (leave_type_id) REFERENCES leave_types(id)
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create leave_requests table");

    sqlx::query(
        "CREATE TABLE holidays (
            id TEXT PRIMARY KEY,
            organization_id TEXT NOT NULL,
            name TEXT NOT NULL,
            date TEXT NOT NULL,
            country_code TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(organization_id, date, country_code),
            FOREIGN KEY (organization_id) REFERENCES organizations(id) ON DELETE CASCADE
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create holidays table");
}
