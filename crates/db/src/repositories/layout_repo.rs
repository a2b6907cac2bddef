//! Repository for the `fridge_layouts` table.
//!
//! Provides CRUD over named fridge layouts. The ≥1-layout-per-household
//! invariant is enforced by the handler via [`LayoutRepo::count_for_household`];
//! this layer only moves rows.

use sqlx::PgPool;

use cellar_core::types::DbId;

use crate::models::layout::{CreateFridgeLayout, FridgeLayout, UpdateFridgeLayout};

/// Column list for `fridge_layouts` queries.
const LAYOUT_COLUMNS: &str = "\
    id, household, name, shelves, columns, created_at, updated_at";

/// Provides data access for fridge layouts.
pub struct LayoutRepo;

impl LayoutRepo {
    /// Create a new fridge layout.
    pub async fn create(
        pool: &PgPool,
        household: &str,
        dto: &CreateFridgeLayout,
    ) -> Result<FridgeLayout, sqlx::Error> {
        let query = format!(
            "INSERT INTO fridge_layouts (household, name, shelves, columns) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {LAYOUT_COLUMNS}"
        );
        sqlx::query_as::<_, FridgeLayout>(&query)
            .bind(household)
            .bind(&dto.name)
            .bind(dto.shelves)
            .bind(dto.columns)
            .fetch_one(pool)
            .await
    }

    /// List all layouts for a household, ordered by name.
    pub async fn list_for_household(
        pool: &PgPool,
        household: &str,
    ) -> Result<Vec<FridgeLayout>, sqlx::Error> {
        let query = format!(
            "SELECT {LAYOUT_COLUMNS} FROM fridge_layouts \
             WHERE household = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, FridgeLayout>(&query)
            .bind(household)
            .fetch_all(pool)
            .await
    }

    /// Find a single layout by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FridgeLayout>, sqlx::Error> {
        let query = format!("SELECT {LAYOUT_COLUMNS} FROM fridge_layouts WHERE id = $1");
        sqlx::query_as::<_, FridgeLayout>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a layout.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateFridgeLayout,
    ) -> Result<Option<FridgeLayout>, sqlx::Error> {
        let query = format!(
            "UPDATE fridge_layouts SET \
                 name       = COALESCE($2, name), \
                 shelves    = COALESCE($3, shelves), \
                 columns    = COALESCE($4, columns), \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {LAYOUT_COLUMNS}"
        );
        sqlx::query_as::<_, FridgeLayout>(&query)
            .bind(id)
            .bind(&dto.name)
            .bind(dto.shelves)
            .bind(dto.columns)
            .fetch_optional(pool)
            .await
    }

    /// Delete a layout by ID.
    ///
    /// Returns `true` if a row was deleted. The caller must check the
    /// last-layout guard first.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fridge_layouts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the layouts belonging to a household.
    pub async fn count_for_household(pool: &PgPool, household: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM fridge_layouts WHERE household = $1")
                .bind(household)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
