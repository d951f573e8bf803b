use crate::brain::AnalysisRecord;
use crate::error::AppError;
use crate::models::{AnalysisRow, StoredAnalysis};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::types::Json;
use sqlx::SqliteExecutor;
use std::str::FromStr;
use tracing::info;

pub async fn init_db(database_url: &str) -> Result<SqlitePool, AppError> {
    info!("Initializing database at: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    info!("Database initialized and migrations applied.");

    Ok(pool)
}

/// Escape `LIKE` wildcards so the needle matches literally.
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

// --- Analyses CRUD ---

/// Store a finished analysis and return it with its id and creation time.
pub async fn insert_analysis<'e, E>(
    executor: E,
    record: &AnalysisRecord,
) -> Result<StoredAnalysis, sqlx::Error>
where
    E: SqliteExecutor<'e>,
{
    let created_at = Utc::now().timestamp();

    let row = sqlx::query_as::<_, AnalysisRow>(
        r#"
        INSERT INTO analyses (title, text, summary, topics, keywords, sentiment, confidence, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, text, summary, topics, keywords, sentiment, confidence, created_at
        "#,
    )
    .bind(&record.title)
    .bind(&record.text)
    .bind(&record.summary)
    .bind(Json(&record.topics))
    .bind(Json(&record.keywords))
    .bind(record.sentiment.label())
    .bind(record.confidence)
    .bind(created_at)
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

pub async fn get_analysis(pool: &SqlitePool, id: i64) -> Result<StoredAnalysis, sqlx::Error> {
    let row = sqlx::query_as::<_, AnalysisRow>(
        r#"
        SELECT id, title, text, summary, topics, keywords, sentiment, confidence, created_at
        FROM analyses
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Analyses with a topic and/or a keyword containing the given substrings.
///
/// Each element of the stored JSON arrays is matched on its own, so JSON
/// punctuation never matches. Case-insensitive for ASCII. `None` skips a
/// filter. Newest first.
pub async fn search_analyses(
    pool: &SqlitePool,
    topic: Option<&str>,
    keyword: Option<&str>,
) -> Result<Vec<StoredAnalysis>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AnalysisRow>(
        r#"
        SELECT id, title, text, summary, topics, keywords, sentiment, confidence, created_at
        FROM analyses
        WHERE (?1 IS NULL OR EXISTS (
                SELECT 1 FROM json_each(analyses.topics) WHERE json_each.value LIKE ?1 ESCAPE '\'
            ))
          AND (?2 IS NULL OR EXISTS (
                SELECT 1 FROM json_each(analyses.keywords) WHERE json_each.value LIKE ?2 ESCAPE '\'
            ))
        ORDER BY id DESC
        "#,
    )
    .bind(topic.map(like_pattern))
    .bind(keyword.map(like_pattern))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(StoredAnalysis::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("snake_case"), "%snake\\_case%");
    }
}
