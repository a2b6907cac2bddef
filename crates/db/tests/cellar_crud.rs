//! Integration tests for the cellar repositories against a real database:
//! - Layout CRUD and household scoping
//! - Slot uniqueness under the storage-layer constraint
//! - Move atomicity (destination collision leaves the source untouched)
//! - Unassigned-wine listing

use sqlx::PgPool;

use cellar_core::slot::{Depth, SlotAddress};
use cellar_db::models::layout::{CreateFridgeLayout, UpdateFridgeLayout};
use cellar_db::models::slot::{CreateCellarSlot, MoveCellarSlot};
use cellar_db::models::wine::CreateWine;
use cellar_db::repositories::{LayoutRepo, SlotRepo, WineRepo};

const HOUSEHOLD: &str = "test-household";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_layout(name: &str) -> CreateFridgeLayout {
    CreateFridgeLayout {
        name: name.to_string(),
        shelves: 6,
        columns: 5,
    }
}

fn new_wine(name: &str) -> CreateWine {
    CreateWine {
        wine_name: name.to_string(),
        producer: Some("Test Estate".to_string()),
        vintage: Some(2018),
        status: None,
    }
}

fn new_slot(wine_id: i64, fridge_id: i64, shelf: i32, column: i32, depth: Depth) -> CreateCellarSlot {
    CreateCellarSlot {
        wine_id,
        fridge_id,
        shelf,
        column,
        depth,
    }
}

fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db)
            if db.code().as_deref() == Some("23505") && db.constraint() == Some(constraint)
    )
}

// ---------------------------------------------------------------------------
// Layout CRUD
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn layout_crud_roundtrip(pool: PgPool) {
    let created = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("Kitchen"))
        .await
        .unwrap();
    assert_eq!(created.shelves, 6);
    assert_eq!(created.columns, 5);

    let listed = LayoutRepo::list_for_household(&pool, HOUSEHOLD).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    // Partial update: only the name changes.
    let updated = LayoutRepo::update(
        &pool,
        created.id,
        &UpdateFridgeLayout {
            name: Some("Garage".to_string()),
            shelves: None,
            columns: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Garage");
    assert_eq!(updated.shelves, 6);

    assert!(LayoutRepo::delete(&pool, created.id).await.unwrap());
    assert!(!LayoutRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test]
async fn layouts_are_scoped_by_household(pool: PgPool) {
    LayoutRepo::create(&pool, "household-a", &new_layout("A")).await.unwrap();
    LayoutRepo::create(&pool, "household-b", &new_layout("B")).await.unwrap();

    assert_eq!(LayoutRepo::count_for_household(&pool, "household-a").await.unwrap(), 1);
    let listed = LayoutRepo::list_for_household(&pool, "household-a").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "A");
}

// ---------------------------------------------------------------------------
// Slot uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn assigning_an_occupied_slot_violates_the_position_constraint(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine_a = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();
    let wine_b = WineRepo::create(&pool, HOUSEHOLD, &new_wine("B")).await.unwrap();

    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_a.id, layout.id, 2, 3, Depth::Front))
        .await
        .unwrap();

    let err = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_b.id, layout.id, 2, 3, Depth::Front))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_cellar_slots_position"));

    // Same cell, different depth is a different slot.
    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_b.id, layout.id, 2, 3, Depth::Back))
        .await
        .unwrap();
}

#[sqlx::test]
async fn a_wine_cannot_hold_two_assignments(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();

    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine.id, layout.id, 1, 1, Depth::Front))
        .await
        .unwrap();

    let err = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine.id, layout.id, 1, 2, Depth::Front))
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err, "uq_cellar_slots_wine"));
}

#[sqlx::test]
async fn removed_slot_can_be_reassigned(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine_a = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();
    let wine_c = WineRepo::create(&pool, HOUSEHOLD, &new_wine("C")).await.unwrap();

    let slot = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_a.id, layout.id, 3, 4, Depth::Back))
        .await
        .unwrap();
    assert!(SlotRepo::delete(&pool, slot.id).await.unwrap());

    // Same address is free again.
    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_c.id, layout.id, 3, 4, Depth::Back))
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Move semantics
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn move_to_free_slot_succeeds(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();

    let slot = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine.id, layout.id, 1, 1, Depth::Front))
        .await
        .unwrap();

    let moved = SlotRepo::relocate(
        &pool,
        slot.id,
        &MoveCellarSlot {
            fridge_id: layout.id,
            shelf: 4,
            column: 2,
            depth: Depth::Back,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(moved.wine_id, wine.id);
    assert_eq!(moved.shelf, 4);
    assert!(SlotRepo::find_by_id(&pool, slot.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn move_to_occupied_slot_fails_without_side_effects(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine_a = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();
    let wine_b = WineRepo::create(&pool, HOUSEHOLD, &new_wine("B")).await.unwrap();

    let slot_a = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_a.id, layout.id, 1, 1, Depth::Front))
        .await
        .unwrap();
    let slot_b = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_b.id, layout.id, 1, 2, Depth::Front))
        .await
        .unwrap();

    let err = SlotRepo::relocate(
        &pool,
        slot_a.id,
        &MoveCellarSlot {
            fridge_id: layout.id,
            shelf: 1,
            column: 2,
            depth: Depth::Front,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err, "uq_cellar_slots_position"));

    // The transaction rolled back: A is still at (1,1,front), B at (1,2,front).
    let a = SlotRepo::find_by_id(&pool, slot_a.id).await.unwrap().unwrap();
    assert_eq!(a.address().unwrap(), SlotAddress::new(1, 1, Depth::Front));
    let b = SlotRepo::find_by_id(&pool, slot_b.id).await.unwrap().unwrap();
    assert_eq!(b.address().unwrap(), SlotAddress::new(1, 2, Depth::Front));
}

#[sqlx::test]
async fn move_of_missing_assignment_returns_none(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();

    let moved = SlotRepo::relocate(
        &pool,
        9999,
        &MoveCellarSlot {
            fridge_id: layout.id,
            shelf: 1,
            column: 1,
            depth: Depth::Front,
        },
    )
    .await
    .unwrap();
    assert!(moved.is_none());
}

#[sqlx::test]
async fn move_within_the_same_cell_across_depth(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();

    let slot = SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine.id, layout.id, 2, 2, Depth::Front))
        .await
        .unwrap();

    // The source row is deleted inside the transaction, so moving to the
    // back of the same cell never collides with itself.
    let moved = SlotRepo::relocate(
        &pool,
        slot.id,
        &MoveCellarSlot {
            fridge_id: layout.id,
            shelf: 2,
            column: 2,
            depth: Depth::Back,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(moved.address().unwrap(), SlotAddress::new(2, 2, Depth::Back));
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn fridge_listing_is_ordered_and_joined(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let wine_a = WineRepo::create(&pool, HOUSEHOLD, &new_wine("A")).await.unwrap();
    let wine_b = WineRepo::create(&pool, HOUSEHOLD, &new_wine("B")).await.unwrap();
    let wine_c = WineRepo::create(&pool, HOUSEHOLD, &new_wine("C")).await.unwrap();

    // Insert out of render order.
    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_b.id, layout.id, 2, 1, Depth::Front))
        .await
        .unwrap();
    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_c.id, layout.id, 1, 1, Depth::Back))
        .await
        .unwrap();
    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(wine_a.id, layout.id, 1, 1, Depth::Front))
        .await
        .unwrap();

    let listed = SlotRepo::list_for_fridge(&pool, layout.id).await.unwrap();
    let order: Vec<(i32, i32, &str)> = listed
        .iter()
        .map(|s| (s.shelf, s.column, s.depth.as_str()))
        .collect();
    assert_eq!(order, vec![(1, 1, "front"), (1, 1, "back"), (2, 1, "front")]);
    assert_eq!(listed[0].wine_name, "A");
}

#[sqlx::test]
async fn unassigned_listing_skips_placed_and_consumed_wines(pool: PgPool) {
    let layout = LayoutRepo::create(&pool, HOUSEHOLD, &new_layout("F")).await.unwrap();
    let placed = WineRepo::create(&pool, HOUSEHOLD, &new_wine("Placed")).await.unwrap();
    let loose = WineRepo::create(&pool, HOUSEHOLD, &new_wine("Loose")).await.unwrap();
    let consumed = WineRepo::create(
        &pool,
        HOUSEHOLD,
        &CreateWine {
            wine_name: "Drunk".to_string(),
            producer: None,
            vintage: None,
            status: Some("consumed".to_string()),
        },
    )
    .await
    .unwrap();

    SlotRepo::insert(&pool, HOUSEHOLD, &new_slot(placed.id, layout.id, 1, 1, Depth::Front))
        .await
        .unwrap();

    let unassigned = SlotRepo::list_unassigned_wines(&pool, HOUSEHOLD).await.unwrap();
    let ids: Vec<i64> = unassigned.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![loose.id]);
    assert!(!ids.contains(&placed.id));
    assert!(!ids.contains(&consumed.id));
}
