//! # SQLite vote store
//!
//! Two tables: a read-mostly `items` catalog and an append-only
//! `votes` log, one row per placement. Votes are never updated or
//! deleted; both aggregates below are recomputed from the full row
//! set on every read. Volume is hundreds to low thousands of rows,
//! so recompute-on-read beats maintaining incremental state.
//!
//! ## Aggregates
//! - `item_averages`: LEFT JOIN of the catalog against votes so a
//!   dish with zero votes still shows up with `count = 0` and null
//!   averages.
//! - `density_points`: GROUP BY the exact (item, x, y) triple. Raw
//!   material for the client's kernel-density contours, not the
//!   estimate itself.

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

use crate::catalog::SeedItem;
use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub image_ref: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewVote {
    pub item_id: i64,
    pub x: f64,
    pub y: f64,
    pub voter_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAverage {
    pub item_id: i64,
    pub name: String,
    pub image_ref: Option<String>,
    pub avg_x: Option<f64>,
    pub avg_y: Option<f64>,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityPoint {
    pub item_id: i64,
    pub x: f64,
    pub y: f64,
    pub count: i64,
}

pub fn init_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

         CREATE TABLE IF NOT EXISTS items (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             slug      TEXT NOT NULL UNIQUE,
             name      TEXT NOT NULL,
             image_ref TEXT
         );

         CREATE TABLE IF NOT EXISTS votes (
             id         INTEGER PRIMARY KEY AUTOINCREMENT,
             item_id    INTEGER NOT NULL REFERENCES items(id),
             x          REAL NOT NULL CHECK (x >= 0.0 AND x <= 1.0),
             y          REAL NOT NULL CHECK (y >= 0.0 AND y <= 1.0),
             voter_id   TEXT,
             created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
         );",
    )?;

    Ok(())
}

/// Upsert the seed catalog keyed on slug. Display fields follow the
/// seed list; ids stay stable across reruns.
pub fn seed_items(conn: &Connection, seeds: &[SeedItem]) -> Result<usize, AppError> {
    let mut stmt = conn.prepare(
        "INSERT INTO items (slug, name, image_ref) VALUES (?1, ?2, ?3)
         ON CONFLICT(slug) DO UPDATE SET
             name = excluded.name,
             image_ref = excluded.image_ref",
    )?;

    for seed in seeds {
        stmt.execute(params![seed.slug, seed.name, seed.image_ref])?;
    }

    Ok(seeds.len())
}

pub fn list_items(conn: &Connection) -> Result<Vec<Item>, AppError> {
    let mut stmt = conn.prepare("SELECT id, slug, name, image_ref FROM items ORDER BY id")?;

    let rows = stmt.query_map([], |row| {
        Ok(Item {
            id: row.get(0)?,
            slug: row.get(1)?,
            name: row.get(2)?,
            image_ref: row.get(3)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(AppError::from)
}

/// Append a batch of votes in one transaction. The whole batch is
/// rejected when any row is out of range or names an unknown item;
/// nothing is persisted in that case.
pub fn insert_votes(conn: &mut Connection, votes: &[NewVote]) -> Result<usize, AppError> {
    for vote in votes {
        if !in_unit_range(vote.x) || !in_unit_range(vote.y) {
            return Err(AppError::CoordinateOutOfRange {
                x: vote.x,
                y: vote.y,
            });
        }
    }

    let tx = conn.transaction()?;

    {
        let mut exists = tx.prepare("SELECT 1 FROM items WHERE id = ?1")?;
        let mut insert = tx.prepare(
            "INSERT INTO votes (item_id, x, y, voter_id) VALUES (?1, ?2, ?3, ?4)",
        )?;

        for vote in votes {
            let known: Option<i64> = exists
                .query_row([vote.item_id], |row| row.get(0))
                .optional()?;
            if known.is_none() {
                return Err(AppError::UnknownItem(vote.item_id));
            }

            insert.execute(params![vote.item_id, vote.x, vote.y, vote.voter_id])?;
        }
    }

    tx.commit()?;

    Ok(votes.len())
}

fn in_unit_range(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

pub fn item_averages(conn: &Connection) -> Result<Vec<ItemAverage>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT i.id, i.name, i.image_ref, AVG(v.x), AVG(v.y), COUNT(v.id)
         FROM items i
         LEFT JOIN votes v ON v.item_id = i.id
         GROUP BY i.id
         ORDER BY i.id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(ItemAverage {
            item_id: row.get(0)?,
            name: row.get(1)?,
            image_ref: row.get(2)?,
            avg_x: row.get(3)?,
            avg_y: row.get(4)?,
            count: row.get(5)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(AppError::from)
}

pub fn density_points(conn: &Connection) -> Result<Vec<DensityPoint>, AppError> {
    let mut stmt = conn.prepare(
        "SELECT item_id, x, y, COUNT(*)
         FROM votes
         GROUP BY item_id, x, y
         ORDER BY item_id, x, y",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(DensityPoint {
            item_id: row.get(0)?,
            x: row.get(1)?,
            y: row.get(2)?,
            count: row.get(3)?,
        })
    })?;

    rows.collect::<Result<Vec<_>, _>>().map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn open() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed_items(&conn, catalog::DISHES).unwrap();
        conn
    }

    fn vote(item_id: i64, x: f64, y: f64) -> NewVote {
        NewVote {
            item_id,
            x,
            y,
            voter_id: None,
        }
    }

    #[test]
    fn seeding_twice_keeps_ids_stable() {
        let conn = open();
        let first = list_items(&conn).unwrap();
        assert_eq!(first.len(), catalog::DISHES.len());

        seed_items(&conn, catalog::DISHES).unwrap();
        let second = list_items(&conn).unwrap();

        assert_eq!(second.len(), first.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.slug, b.slug);
        }
    }

    #[test]
    fn averages_over_opposite_corners() {
        let mut conn = open();
        insert_votes(&mut conn, &[vote(1, 0.0, 0.0), vote(1, 1.0, 1.0)]).unwrap();

        let averages = item_averages(&conn).unwrap();
        let ceviche = averages.iter().find(|a| a.item_id == 1).unwrap();

        assert_eq!(ceviche.count, 2);
        assert_eq!(ceviche.avg_x, Some(0.5));
        assert_eq!(ceviche.avg_y, Some(0.5));
    }

    #[test]
    fn unvoted_item_reports_null_average() {
        let conn = open();
        let averages = item_averages(&conn).unwrap();

        assert_eq!(averages.len(), catalog::DISHES.len());
        for avg in &averages {
            assert_eq!(avg.count, 0);
            assert_eq!(avg.avg_x, None);
            assert_eq!(avg.avg_y, None);
        }
    }

    #[test]
    fn density_groups_exact_coordinates() {
        let mut conn = open();
        insert_votes(
            &mut conn,
            &[vote(1, 0.3, 0.7), vote(1, 0.3, 0.7), vote(1, 0.3, 0.70001)],
        )
        .unwrap();

        let points = density_points(&conn).unwrap();
        assert_eq!(points.len(), 2);

        let stacked = points.iter().find(|p| p.y == 0.7).unwrap();
        assert_eq!(stacked.count, 2);

        let lone = points.iter().find(|p| p.y == 0.70001).unwrap();
        assert_eq!(lone.count, 1);
    }

    #[test]
    fn out_of_range_batch_persists_nothing() {
        let mut conn = open();
        let result = insert_votes(&mut conn, &[vote(1, 0.5, 0.5), vote(2, 0.5, 1.5)]);

        assert!(matches!(
            result,
            Err(AppError::CoordinateOutOfRange { .. })
        ));

        let averages = item_averages(&conn).unwrap();
        assert!(averages.iter().all(|a| a.count == 0));
    }

    #[test]
    fn unknown_item_rolls_back_batch() {
        let mut conn = open();
        let result = insert_votes(&mut conn, &[vote(1, 0.2, 0.2), vote(999, 0.5, 0.5)]);

        assert!(matches!(result, Err(AppError::UnknownItem(999))));

        let averages = item_averages(&conn).unwrap();
        assert!(averages.iter().all(|a| a.count == 0));
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        let mut conn = open();
        let result = insert_votes(&mut conn, &[vote(1, f64::NAN, 0.5)]);

        assert!(matches!(
            result,
            Err(AppError::CoordinateOutOfRange { .. })
        ));
    }
}
