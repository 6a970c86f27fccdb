//! Hackathon repository

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::hackathons::request::{PrizeInput, SessionInput, TimelineInput},
    models::{GuidanceSession, Hackathon, Prize, TimelineEntry},
};

/// Repository for hackathon database operations
pub struct HackathonRepository;

impl HackathonRepository {
    /// Create a hackathon together with its timeline, prizes and sessions
    /// in a single transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        name: &str,
        description: Option<&str>,
        theme: Option<&str>,
        city: Option<&str>,
        thumbnail_url: Option<&str>,
        host_id: &Uuid,
        status: &str,
        registration_start: Option<chrono::DateTime<chrono::Utc>>,
        registration_end: Option<chrono::DateTime<chrono::Utc>>,
        timelines: &[TimelineInput],
        prizes: &[PrizeInput],
        sessions: &[SessionInput],
    ) -> AppResult<Hackathon> {
        let mut tx = pool.begin().await?;

        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            INSERT INTO hackathons (
                name, description, theme, city, thumbnail_url, host_id,
                status, registration_start, registration_end
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(description)
        .bind(theme)
        .bind(city)
        .bind(thumbnail_url)
        .bind(host_id)
        .bind(status)
        .bind(registration_start)
        .bind(registration_end)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_children(&mut tx, &hackathon.id, timelines, prizes, sessions).await?;

        tx.commit().await?;

        Ok(hackathon)
    }

    /// Find hackathon by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Hackathon>> {
        let hackathon = sqlx::query_as::<_, Hackathon>(r#"SELECT * FROM hackathons WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(hackathon)
    }

    /// Update hackathon fields; when child lists are supplied they replace
    /// the existing ones atomically.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        theme: Option<&str>,
        city: Option<&str>,
        thumbnail_url: Option<&str>,
        status: Option<&str>,
        registration_start: Option<chrono::DateTime<chrono::Utc>>,
        registration_end: Option<chrono::DateTime<chrono::Utc>>,
        timelines: Option<&[TimelineInput]>,
        prizes: Option<&[PrizeInput]>,
        sessions: Option<&[SessionInput]>,
    ) -> AppResult<Hackathon> {
        let mut tx = pool.begin().await?;

        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            UPDATE hackathons
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                theme = COALESCE($4, theme),
                city = COALESCE($5, city),
                thumbnail_url = COALESCE($6, thumbnail_url),
                status = COALESCE($7, status),
                registration_start = COALESCE($8, registration_start),
                registration_end = COALESCE($9, registration_end),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(theme)
        .bind(city)
        .bind(thumbnail_url)
        .bind(status)
        .bind(registration_start)
        .bind(registration_end)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(timelines) = timelines {
            sqlx::query(r#"DELETE FROM hackathon_timelines WHERE hackathon_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_timelines(&mut tx, id, timelines).await?;
        }

        if let Some(prizes) = prizes {
            sqlx::query(r#"DELETE FROM hackathon_prizes WHERE hackathon_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_prizes(&mut tx, id, prizes).await?;
        }

        if let Some(sessions) = sessions {
            sqlx::query(r#"DELETE FROM hackathon_sessions WHERE hackathon_id = $1"#)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_sessions(&mut tx, id, sessions).await?;
        }

        tx.commit().await?;

        Ok(hackathon)
    }

    /// Delete hackathon (children cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM hackathons WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// List hackathons with pagination and filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        status: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Hackathon>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let hackathons = sqlx::query_as::<_, Hackathon>(
            r#"
            SELECT * FROM hackathons
            WHERE
                ($1::text IS NULL OR status = $1)
                AND ($2::text IS NULL OR name ILIKE $2 OR theme ILIKE $2 OR city ILIKE $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(status)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM hackathons
            WHERE
                ($1::text IS NULL OR status = $1)
                AND ($2::text IS NULL OR name ILIKE $2 OR theme ILIKE $2 OR city ILIKE $2)
            "#,
        )
        .bind(status)
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((hackathons, count))
    }

    /// Fetch the timeline entries for a hackathon, in display order
    pub async fn timelines(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<Vec<TimelineEntry>> {
        let entries = sqlx::query_as::<_, TimelineEntry>(
            r#"SELECT * FROM hackathon_timelines WHERE hackathon_id = $1 ORDER BY position"#,
        )
        .bind(hackathon_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Fetch the prizes for a hackathon, in display order
    pub async fn prizes(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<Vec<Prize>> {
        let prizes = sqlx::query_as::<_, Prize>(
            r#"SELECT * FROM hackathon_prizes WHERE hackathon_id = $1 ORDER BY position"#,
        )
        .bind(hackathon_id)
        .fetch_all(pool)
        .await?;

        Ok(prizes)
    }

    /// Fetch the guidance sessions for a hackathon
    pub async fn sessions(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<Vec<GuidanceSession>> {
        let sessions = sqlx::query_as::<_, GuidanceSession>(
            r#"SELECT * FROM hackathon_sessions WHERE hackathon_id = $1 ORDER BY scheduled_at"#,
        )
        .bind(hackathon_id)
        .fetch_all(pool)
        .await?;

        Ok(sessions)
    }

    /// Count total hackathons
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM hackathons"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    async fn insert_children(
        tx: &mut Transaction<'_, Postgres>,
        hackathon_id: &Uuid,
        timelines: &[TimelineInput],
        prizes: &[PrizeInput],
        sessions: &[SessionInput],
    ) -> AppResult<()> {
        Self::insert_timelines(tx, hackathon_id, timelines).await?;
        Self::insert_prizes(tx, hackathon_id, prizes).await?;
        Self::insert_sessions(tx, hackathon_id, sessions).await?;
        Ok(())
    }

    async fn insert_timelines(
        tx: &mut Transaction<'_, Postgres>,
        hackathon_id: &Uuid,
        timelines: &[TimelineInput],
    ) -> AppResult<()> {
        for (position, entry) in timelines.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO hackathon_timelines (hackathon_id, title, kind, occurs_on, status, position)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(hackathon_id)
            .bind(&entry.title)
            .bind(&entry.kind)
            .bind(entry.occurs_on)
            .bind(&entry.status)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn insert_prizes(
        tx: &mut Transaction<'_, Postgres>,
        hackathon_id: &Uuid,
        prizes: &[PrizeInput],
    ) -> AppResult<()> {
        for (position, prize) in prizes.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO hackathon_prizes (hackathon_id, title, description, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(hackathon_id)
            .bind(&prize.title)
            .bind(&prize.description)
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn insert_sessions(
        tx: &mut Transaction<'_, Postgres>,
        hackathon_id: &Uuid,
        sessions: &[SessionInput],
    ) -> AppResult<()> {
        for session in sessions {
            sqlx::query(
                r#"
                INSERT INTO hackathon_sessions (hackathon_id, title, mentor, scheduled_at, meeting_url)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(hackathon_id)
            .bind(&session.title)
            .bind(&session.mentor)
            .bind(session.scheduled_at)
            .bind(&session.meeting_url)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}
