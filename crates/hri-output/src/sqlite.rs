//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `dataset.db` file in the configured output directory with
//! three tables: `trials`, `trajectories`, and `goals`.

use std::path::Path;

use hri_dataset::Dataset;
use rusqlite::Connection;
use tracing::debug;

use crate::writer::DatasetWriter;
use crate::{OutputResult, TrialRows};

/// Writes a dataset to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Create `dir` if needed, open (or create) `dataset.db`, and initialise
    /// the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("dataset.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trials (
                 trial                INTEGER PRIMARY KEY,
                 reached              INTEGER NOT NULL,
                 goal_idx             INTEGER NOT NULL,
                 robot_goal_x         REAL    NOT NULL,
                 robot_goal_y         REAL    NOT NULL,
                 filter_interventions INTEGER NOT NULL,
                 infeasible_steps     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS trajectories (
                 trial   INTEGER NOT NULL,
                 step    INTEGER NOT NULL,
                 agent   TEXT    NOT NULL,
                 px      REAL    NOT NULL,
                 vx      REAL    NOT NULL,
                 py      REAL    NOT NULL,
                 vy      REAL    NOT NULL,
                 goal_x  REAL    NOT NULL,
                 goal_y  REAL    NOT NULL,
                 reached INTEGER
             );
             CREATE TABLE IF NOT EXISTS goals (
                 trial    INTEGER NOT NULL,
                 goal_idx INTEGER NOT NULL,
                 x        REAL    NOT NULL,
                 y        REAL    NOT NULL
             );",
        )?;

        debug!(dir = %dir.display(), "sqlite writer opened");
        Ok(Self { conn, finished: false })
    }
}

fn insert(conn: &Connection, rows: &TrialRows) -> OutputResult<()> {
    let t = &rows.trial;
    conn.prepare_cached(
        "INSERT INTO trials \
         (trial, reached, goal_idx, robot_goal_x, robot_goal_y, filter_interventions, infeasible_steps) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?
    .execute(rusqlite::params![
        t.trial as i64,
        t.reached,
        t.goal_idx as i64,
        t.robot_goal_x,
        t.robot_goal_y,
        t.filter_interventions as i64,
        t.infeasible_steps as i64,
    ])?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO trajectories \
         (trial, step, agent, px, vx, py, vy, goal_x, goal_y, reached) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    for row in &rows.trajectory {
        stmt.execute(rusqlite::params![
            row.trial as i64,
            row.step as i64,
            row.agent.as_str(),
            row.px,
            row.vx,
            row.py,
            row.vy,
            row.goal_x,
            row.goal_y,
            row.reached,
        ])?;
    }

    let mut stmt = conn.prepare_cached(
        "INSERT INTO goals (trial, goal_idx, x, y) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for row in &rows.goals {
        stmt.execute(rusqlite::params![row.trial as i64, row.goal_idx as i64, row.x, row.y])?;
    }
    Ok(())
}

impl DatasetWriter for SqliteWriter {
    fn write_trial(&mut self, rows: &TrialRows) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        insert(&tx, rows)?;
        tx.commit()?;
        Ok(())
    }

    /// The whole dataset goes in a single transaction.
    fn write_dataset(&mut self, dataset: &Dataset) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for (trial, record) in dataset.records().iter().enumerate() {
            insert(&tx, &TrialRows::from_record(trial, record))?;
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
