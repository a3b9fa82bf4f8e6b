use sqlx::PgPool;

/// Flatten a tag list to the stored text form. Tags are joined with a bare
/// comma; a tag that itself contains a comma is flattened into its parts on
/// the next read.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Save a user's preferences, replacing any existing row. At most one row
/// exists per user; repeated identical saves are idempotent.
pub async fn upsert_preferences(
    db: &PgPool,
    user_id: &str,
    interests: &str,
    sub_interests: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_preferences (user_id, interests, sub_interests)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id) DO UPDATE
        SET interests = EXCLUDED.interests,
            sub_interests = EXCLUDED.sub_interests
        "#,
    )
    .bind(user_id)
    .bind(interests)
    .bind(sub_interests)
    .execute(db)
    .await?;
    Ok(())
}
