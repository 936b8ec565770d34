use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    scenesync_db::health_check(&pool).await.unwrap();

    let columns: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT column_name::text, data_type::text, is_nullable::text
         FROM information_schema.columns
         WHERE table_name = 'projects'
         ORDER BY ordinal_position",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = columns.iter().map(|c| c.0.as_str()).collect();
    assert_eq!(
        names,
        [
            "id",
            "title",
            "description",
            "status",
            "created_by",
            "created_at",
            "updated_at"
        ]
    );

    let nullable: Vec<&str> = columns
        .iter()
        .filter(|c| c.2 == "YES")
        .map(|c| c.0.as_str())
        .collect();
    assert_eq!(nullable, ["description", "created_by"]);
}

/// Status defaults to `active` even when the insert omits it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_column_default(pool: PgPool) {
    let status: (String,) =
        sqlx::query_as("INSERT INTO projects (title) VALUES ('raw') RETURNING status")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status.0, "active");
}
