//! Repository for the `cellar_slots` table: the persistence side of the
//! placement service.
//!
//! Collision handling: inserts rely on the `uq_cellar_slots_position`
//! unique constraint as the source of truth. [`SlotRepo::find_at_address`]
//! exists only as an early-exit pre-check so callers can produce a precise
//! error without racing another writer.

use sqlx::PgPool;

use cellar_core::slot::SlotAddress;
use cellar_core::types::DbId;
use cellar_core::wine::WineSummary;

use crate::models::slot::{CellarSlot, CreateCellarSlot, MoveCellarSlot, SlotWithWine};

/// Column list for `cellar_slots` queries.
const SLOT_COLUMNS: &str = "\
    id, household, wine_id, fridge_id, shelf, column_position, depth, created_at";

/// Provides data access for cellar slot assignments.
pub struct SlotRepo;

impl SlotRepo {
    /// Insert a new assignment.
    ///
    /// A position or wine collision surfaces as a unique-constraint
    /// violation for the caller to classify.
    pub async fn insert(
        pool: &PgPool,
        household: &str,
        dto: &CreateCellarSlot,
    ) -> Result<CellarSlot, sqlx::Error> {
        let query = format!(
            "INSERT INTO cellar_slots \
                 (household, wine_id, fridge_id, shelf, column_position, depth) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SLOT_COLUMNS}"
        );
        sqlx::query_as::<_, CellarSlot>(&query)
            .bind(household)
            .bind(dto.wine_id)
            .bind(dto.fridge_id)
            .bind(dto.shelf)
            .bind(dto.column)
            .bind(dto.depth.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a single assignment by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CellarSlot>, sqlx::Error> {
        let query = format!("SELECT {SLOT_COLUMNS} FROM cellar_slots WHERE id = $1");
        sqlx::query_as::<_, CellarSlot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the assignment occupying an address, if any.
    ///
    /// `exclude` removes one assignment from consideration so a move can
    /// collision-check a destination without matching its own source row.
    pub async fn find_at_address(
        pool: &PgPool,
        fridge_id: DbId,
        address: SlotAddress,
        exclude: Option<DbId>,
    ) -> Result<Option<CellarSlot>, sqlx::Error> {
        let query = format!(
            "SELECT {SLOT_COLUMNS} FROM cellar_slots \
             WHERE fridge_id = $1 AND shelf = $2 AND column_position = $3 AND depth = $4 \
               AND ($5::bigint IS NULL OR id <> $5)"
        );
        sqlx::query_as::<_, CellarSlot>(&query)
            .bind(fridge_id)
            .bind(address.shelf)
            .bind(address.column)
            .bind(address.depth.as_str())
            .bind(exclude)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cellar_slots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Move an assignment to a new address.
    ///
    /// Runs in a transaction: delete the source row, insert the destination
    /// row, commit. A destination collision aborts the transaction, so the
    /// wine stays at its original address. Returns `None` if the source
    /// assignment does not exist.
    pub async fn relocate(
        pool: &PgPool,
        id: DbId,
        dest: &MoveCellarSlot,
    ) -> Result<Option<CellarSlot>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let delete_query = format!("DELETE FROM cellar_slots WHERE id = $1 RETURNING {SLOT_COLUMNS}");
        let source: Option<CellarSlot> = sqlx::query_as(&delete_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(source) = source else {
            return Ok(None);
        };

        let insert_query = format!(
            "INSERT INTO cellar_slots \
                 (household, wine_id, fridge_id, shelf, column_position, depth) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {SLOT_COLUMNS}"
        );
        let created: CellarSlot = sqlx::query_as(&insert_query)
            .bind(&source.household)
            .bind(source.wine_id)
            .bind(dest.fridge_id)
            .bind(dest.shelf)
            .bind(dest.column)
            .bind(dest.depth.as_str())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(created))
    }

    /// List all assignments in a fridge joined with wine display attributes.
    ///
    /// Ordered by shelf, column, then depth (front before back) for stable
    /// rendering.
    pub async fn list_for_fridge(
        pool: &PgPool,
        fridge_id: DbId,
    ) -> Result<Vec<SlotWithWine>, sqlx::Error> {
        sqlx::query_as::<_, SlotWithWine>(
            "SELECT cs.id, cs.wine_id, cs.fridge_id, cs.shelf, cs.column_position, cs.depth, \
                    w.wine_name, w.producer, w.vintage \
             FROM cellar_slots cs \
             JOIN wines w ON w.id = cs.wine_id \
             WHERE cs.fridge_id = $1 \
             ORDER BY cs.shelf, cs.column_position, cs.depth DESC",
        )
        .bind(fridge_id)
        .fetch_all(pool)
        .await
    }

    /// List summaries of in-cellar wines with no current assignment.
    pub async fn list_unassigned_wines(
        pool: &PgPool,
        household: &str,
    ) -> Result<Vec<WineSummary>, sqlx::Error> {
        let rows: Vec<(DbId, String, String, Option<i32>)> = sqlx::query_as(
            "SELECT w.id, w.wine_name, w.producer, w.vintage \
             FROM wines w \
             LEFT JOIN cellar_slots cs ON cs.wine_id = w.id \
             WHERE w.household = $1 AND w.status = 'in_cellar' AND cs.id IS NULL \
             ORDER BY w.wine_name, w.id",
        )
        .bind(household)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, wine_name, producer, vintage)| WineSummary {
                id,
                wine_name,
                producer,
                vintage,
            })
            .collect())
    }
}
