//! Repository for the `wines` table.

use sqlx::PgPool;

use cellar_core::types::DbId;

use crate::models::wine::{CreateWine, UpdateWine, Wine};

/// Column list for `wines` queries.
const WINE_COLUMNS: &str = "\
    id, household, wine_name, producer, vintage, status, created_at, updated_at";

/// Provides data access for wine records.
pub struct WineRepo;

impl WineRepo {
    /// Create a new wine record.
    pub async fn create(
        pool: &PgPool,
        household: &str,
        dto: &CreateWine,
    ) -> Result<Wine, sqlx::Error> {
        let query = format!(
            "INSERT INTO wines (household, wine_name, producer, vintage, status) \
             VALUES ($1, $2, COALESCE($3, ''), $4, COALESCE($5, 'in_cellar')) \
             RETURNING {WINE_COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(household)
            .bind(&dto.wine_name)
            .bind(&dto.producer)
            .bind(dto.vintage)
            .bind(&dto.status)
            .fetch_one(pool)
            .await
    }

    /// List wines for a household, optionally filtered by status.
    pub async fn list_for_household(
        pool: &PgPool,
        household: &str,
        status: Option<&str>,
    ) -> Result<Vec<Wine>, sqlx::Error> {
        let query = format!(
            "SELECT {WINE_COLUMNS} FROM wines \
             WHERE household = $1 AND ($2::text IS NULL OR status = $2) \
             ORDER BY wine_name, id"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(household)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Find a single wine by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!("SELECT {WINE_COLUMNS} FROM wines WHERE id = $1");
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a wine record.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateWine,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query = format!(
            "UPDATE wines SET \
                 wine_name  = COALESCE($2, wine_name), \
                 producer   = COALESCE($3, producer), \
                 vintage    = COALESCE($4, vintage), \
                 status     = COALESCE($5, status), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {WINE_COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .bind(&dto.wine_name)
            .bind(&dto.producer)
            .bind(dto.vintage)
            .bind(&dto.status)
            .fetch_optional(pool)
            .await
    }
}
