//! Integration tests for hri-output.

use hri_agent::GoalSelection;
use hri_core::{Goal, SimConfig, State};
use hri_dataset::{Dataset, DatasetBuilder};
use hri_sim::Scenario;
use tempfile::TempDir;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

const HORIZON: usize = 5;

fn scenario(human_goal: usize) -> Scenario {
    Scenario {
        human:      State::at_rest(5.0, 5.0),
        robot:      State::at_rest(-5.0, -5.0),
        goals:      vec![Goal::at(5.0, 5.0), Goal::at(-5.0, -5.0), Goal::at(0.0, 8.0)],
        robot_goal: 1,
        human_goal: GoalSelection::Fixed(human_goal),
    }
}

fn config() -> SimConfig {
    SimConfig { horizon: HORIZON, ..SimConfig::default() }
}

/// Trial 0: human parked on its goal.  Trial 1: human far from goal 2.
fn dataset() -> Dataset {
    DatasetBuilder::new(config())
        .scenarios(vec![scenario(0), scenario(2)])
        .build()
        .unwrap()
}

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::{AgentKind, TrialRows};

    #[test]
    fn rows_follow_record_layout() {
        let ds = dataset();
        let rows = TrialRows::from_record(1, &ds.records()[1]);

        assert_eq!(rows.trial.trial, 1);
        assert_eq!(rows.trial.goal_idx, 2);
        assert_eq!(rows.trial.reached, 0);
        assert_eq!((rows.trial.robot_goal_x, rows.trial.robot_goal_y), (-5.0, -5.0));

        assert_eq!(rows.trajectory.len(), 2 * HORIZON);
        assert!(rows.trajectory[..HORIZON].iter().all(|r| r.agent == AgentKind::Human));
        assert!(rows.trajectory[HORIZON..].iter().all(|r| r.agent == AgentKind::Robot));
        assert_eq!(rows.trajectory[3].step, 3);
        assert_eq!((rows.trajectory[0].goal_x, rows.trajectory[0].goal_y), (0.0, 8.0));
        assert_eq!(rows.trajectory[0].reached, Some(0));
        assert_eq!(rows.trajectory[HORIZON].reached, None);
        assert_eq!(rows.trajectory[HORIZON].px, -5.0);

        assert_eq!(rows.goals.len(), 3);
        assert_eq!(rows.goals[2].goal_idx, 2);
        assert_eq!(rows.goals[2].y, 8.0);
    }

    #[test]
    fn trial_row_matches_dataset_labels() {
        let ds = dataset();
        for (i, (record, labels)) in ds.records().iter().zip(ds.labels()).enumerate() {
            let rows = TrialRows::from_record(i, record);
            assert_eq!(rows.trial.reached, labels.reached);
            assert_eq!(rows.trial.goal_idx, labels.goal_index as u64);
        }
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::{CsvWriter, GOAL_HEADER, TRAJECTORY_HEADER, TRIAL_HEADER};
    use crate::writer::DatasetWriter;

    fn read(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("trials.csv").exists());
        assert!(out.join("trajectories.csv").exists());
        assert!(out.join("goals.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(read(dir.path().join("trials.csv")).0, TRIAL_HEADER);
        assert_eq!(read(dir.path().join("trajectories.csv")).0, TRAJECTORY_HEADER);
        assert_eq!(read(dir.path().join("goals.csv")).0, GOAL_HEADER);
    }

    #[test]
    fn csv_dataset_contents() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_dataset(&dataset()).unwrap();
        w.finish().unwrap();

        let (_, trials) = read(dir.path().join("trials.csv"));
        assert_eq!(trials.len(), 2);
        assert_eq!(&trials[0][1], "1"); // reached
        assert_eq!(&trials[0][2], "0"); // goal_idx
        assert_eq!(&trials[1][1], "0");
        assert_eq!(&trials[1][2], "2");

        let (_, traj) = read(dir.path().join("trajectories.csv"));
        assert_eq!(traj.len(), 2 * 2 * HORIZON);
        assert_eq!(&traj[0][2], "human");
        assert_eq!(&traj[0][3], "5");
        assert_eq!(&traj[0][9], "1");
        assert_eq!(&traj[HORIZON][2], "robot");
        assert_eq!(&traj[HORIZON][9], "");

        let (_, goals) = read(dir.path().join("goals.csv"));
        assert_eq!(goals.len(), 6);
        assert_eq!(&goals[5][0], "1");
        assert_eq!(&goals[5][3], "8");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;
    use hri_sim::SimBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::TrialOutputObserver;

    #[test]
    fn observer_numbers_trials_in_order() {
        let dir = tmp();
        let mut obs = TrialOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        for s in [scenario(0), scenario(2)] {
            SimBuilder::new(config(), s).build().unwrap().run(&mut obs).unwrap();
        }
        assert_eq!(obs.next_trial(), 2);
        assert!(obs.take_error().is_none());
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trials.csv")).unwrap();
        let trials: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(trials, ["0", "1"]);
    }

    #[test]
    fn observer_matches_dataset_writer() {
        let a = tmp();
        let b = tmp();

        let mut obs = TrialOutputObserver::new(CsvWriter::new(a.path()).unwrap());
        for s in [scenario(0), scenario(2)] {
            SimBuilder::new(config(), s).build().unwrap().run(&mut obs).unwrap();
        }
        obs.finish().unwrap();

        let mut w = CsvWriter::new(b.path()).unwrap();
        crate::DatasetWriter::write_dataset(&mut w, &dataset()).unwrap();
        crate::DatasetWriter::finish(&mut w).unwrap();

        for file in ["trials.csv", "trajectories.csv", "goals.csv"] {
            let x = std::fs::read_to_string(a.path().join(file)).unwrap();
            let y = std::fs::read_to_string(b.path().join(file)).unwrap();
            assert_eq!(x, y, "{file}");
        }
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::DatasetWriter;

    fn written() -> TempDir {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_dataset(&dataset()).unwrap();
        w.finish().unwrap();
        dir
    }

    fn count(conn: &rusqlite::Connection, sql: &str) -> i64 {
        conn.query_row(sql, [], |r| r.get(0)).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("dataset.db").exists());
    }

    #[test]
    fn sqlite_row_counts() {
        let dir = written();
        let conn = rusqlite::Connection::open(dir.path().join("dataset.db")).unwrap();
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM trials"), 2);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM trajectories"), (2 * 2 * HORIZON) as i64);
        assert_eq!(count(&conn, "SELECT COUNT(*) FROM goals"), 6);
    }

    #[test]
    fn sqlite_labels_and_nulls() {
        let dir = written();
        let conn = rusqlite::Connection::open(dir.path().join("dataset.db")).unwrap();
        assert_eq!(count(&conn, "SELECT goal_idx FROM trials WHERE trial = 1"), 2);
        assert_eq!(count(&conn, "SELECT SUM(reached) FROM trials"), 1);
        assert_eq!(
            count(&conn, "SELECT COUNT(*) FROM trajectories WHERE agent = 'robot' AND reached IS NULL"),
            (2 * HORIZON) as i64
        );
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
