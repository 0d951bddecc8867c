//! Repository for the `submissions` table.

use castdesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission, SubmissionQuery, UpdateSubmission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, list_id, name, surname, date_of_birth, gender, age, ethnicity, \
                        contact, social_media, agency, agency_email, height_cm, tshirt_size, \
                        waist_size, pants_size, dress_size, shoe_size, work_history, \
                        has_work_visa, has_criminal_record, has_drivers_license, availability, \
                        audition_number, image_urls, video_url, created_at, updated_at";

/// Default page size for browse queries.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for browse queries.
const MAX_LIMIT: i64 = 200;

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

/// Provides CRUD and browse operations for talent submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubmission,
    ) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (
                list_id, name, surname, date_of_birth, gender, age, ethnicity, contact,
                social_media, agency, agency_email, height_cm, tshirt_size, waist_size,
                pants_size, dress_size, shoe_size, work_history, has_work_visa,
                has_criminal_record, has_drivers_license, availability, image_urls, video_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
                     $15, $16, $17, $18, $19, $20, $21, $22, $23, $24)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(input.list_id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.ethnicity)
            .bind(&input.contact)
            .bind(&input.social_media)
            .bind(&input.agency)
            .bind(&input.agency_email)
            .bind(input.height_cm)
            .bind(&input.tshirt_size)
            .bind(input.waist_size)
            .bind(input.pants_size)
            .bind(&input.dress_size)
            .bind(input.shoe_size)
            .bind(&input.work_history)
            .bind(input.has_work_visa)
            .bind(input.has_criminal_record)
            .bind(input.has_drivers_license)
            .bind(&input.availability)
            .bind(&input.image_urls)
            .bind(&input.video_url)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Browse a list's submissions with optional filters and pagination.
    ///
    /// Filters are expressed as nullable binds so the statement stays
    /// static; `favorites_only` narrows to submissions carrying a favorite
    /// marker.
    pub async fn list_by_list(
        pool: &PgPool,
        list_id: DbId,
        params: &SubmissionQuery,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE list_id = $1
               AND ($2::text IS NULL OR gender = $2)
               AND ($3::text IS NULL OR ethnicity = $3)
               AND (NOT $4 OR EXISTS (
                    SELECT 1 FROM favorites WHERE favorites.submission_id = submissions.id))
               AND ($5::text IS NULL
                    OR name ILIKE '%' || $5 || '%'
                    OR surname ILIKE '%' || $5 || '%')
             ORDER BY created_at DESC
             LIMIT $6 OFFSET $7"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(list_id)
            .bind(&params.gender)
            .bind(&params.ethnicity)
            .bind(params.favorites_only)
            .bind(&params.search)
            .bind(clamp_limit(params.limit))
            .bind(clamp_offset(params.offset))
            .fetch_all(pool)
            .await
    }

    /// All favorited submissions of a list, in audition-number order with
    /// unnumbered rows last. Used to build presentation snapshots.
    pub async fn list_favorited_by_list(
        pool: &PgPool,
        list_id: DbId,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE list_id = $1
               AND EXISTS (SELECT 1 FROM favorites WHERE favorites.submission_id = submissions.id)
             ORDER BY audition_number NULLS LAST, created_at"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
    }

    /// Update a submission. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubmission,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET
                name = COALESCE($2, name),
                surname = COALESCE($3, surname),
                date_of_birth = COALESCE($4, date_of_birth),
                gender = COALESCE($5, gender),
                age = COALESCE($6, age),
                ethnicity = COALESCE($7, ethnicity),
                contact = COALESCE($8, contact),
                social_media = COALESCE($9, social_media),
                agency = COALESCE($10, agency),
                agency_email = COALESCE($11, agency_email),
                height_cm = COALESCE($12, height_cm),
                tshirt_size = COALESCE($13, tshirt_size),
                waist_size = COALESCE($14, waist_size),
                pants_size = COALESCE($15, pants_size),
                dress_size = COALESCE($16, dress_size),
                shoe_size = COALESCE($17, shoe_size),
                work_history = COALESCE($18, work_history),
                has_work_visa = COALESCE($19, has_work_visa),
                has_criminal_record = COALESCE($20, has_criminal_record),
                has_drivers_license = COALESCE($21, has_drivers_license),
                availability = COALESCE($22, availability),
                image_urls = COALESCE($23, image_urls),
                video_url = COALESCE($24, video_url),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.ethnicity)
            .bind(&input.contact)
            .bind(&input.social_media)
            .bind(&input.agency)
            .bind(&input.agency_email)
            .bind(input.height_cm)
            .bind(&input.tshirt_size)
            .bind(input.waist_size)
            .bind(input.pants_size)
            .bind(&input.dress_size)
            .bind(input.shoe_size)
            .bind(&input.work_history)
            .bind(input.has_work_visa)
            .bind(input.has_criminal_record)
            .bind(input.has_drivers_license)
            .bind(&input.availability)
            .bind(&input.image_urls)
            .bind(&input.video_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submission by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Allocate the next sequential audition number within the list.
    ///
    /// Only applies to rows that are still unnumbered; returns `None` when
    /// the row does not exist or already carries a number. Two concurrent
    /// allocations in the same list can compute the same next number; the
    /// loser hits `uq_submissions_list_audition` and surfaces as a conflict.
    pub async fn allocate_audition_number(
        pool: &PgPool,
        list_id: DbId,
        id: DbId,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!(
            "UPDATE submissions SET
                audition_number = (
                    SELECT COALESCE(MAX(audition_number), 0) + 1
                    FROM submissions
                    WHERE list_id = $2
                ),
                updated_at = NOW()
             WHERE id = $1 AND list_id = $2 AND audition_number IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .bind(list_id)
            .fetch_optional(pool)
            .await
    }
}
