//! Plain data row types written by output backends.

use std::fmt;

use hri_core::State;
use hri_dataset::TrialLabels;
use hri_sim::TrialRecord;

/// One row of `trials`: labels and filter counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRow {
    pub trial:                u64,
    pub reached:              u8,
    pub goal_idx:             u64,
    pub robot_goal_x:         f64,
    pub robot_goal_y:         f64,
    pub filter_interventions: u64,
    pub infeasible_steps:     u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Human,
    Robot,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Human => "human",
            AgentKind::Robot => "robot",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agent's state at one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub trial:  u64,
    pub step:   u64,
    pub agent:  AgentKind,
    pub px:     f64,
    pub vx:     f64,
    pub py:     f64,
    pub vy:     f64,
    /// Goal pursued at this step (the human's current goal, or the robot's
    /// fixed goal).
    pub goal_x: f64,
    pub goal_y: f64,
    /// Reached indicator; recorded for the human only.
    pub reached: Option<u8>,
}

/// One candidate goal of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalRow {
    pub trial:    u64,
    pub goal_idx: u64,
    pub x:        f64,
    pub y:        f64,
}

/// All rows for one trial.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRows {
    pub trial:      TrialRow,
    /// Human rows then robot rows, each in step order.
    pub trajectory: Vec<TrajectoryRow>,
    pub goals:      Vec<GoalRow>,
}

impl TrialRows {
    /// Flatten a record.  Labels are recomputed from the record itself so
    /// they always agree with the dataset's.
    pub fn from_record(trial: usize, record: &TrialRecord) -> Self {
        let trial = trial as u64;
        let labels = TrialLabels::from_record(record);
        let [rgx, rgy] = record.robot_goal.position();

        let human = record
            .human
            .states()
            .iter()
            .zip(&record.human_goals)
            .zip(&record.reached)
            .enumerate()
            .map(|(step, ((s, g), &r))| {
                let [gx, gy] = g.position();
                trajectory_row(trial, step, AgentKind::Human, s, gx, gy, Some(r))
            });
        let robot = record
            .robot
            .states()
            .iter()
            .enumerate()
            .map(|(step, s)| trajectory_row(trial, step, AgentKind::Robot, s, rgx, rgy, None));

        let goals = record
            .goals
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let [x, y] = g.position();
                GoalRow { trial, goal_idx: i as u64, x, y }
            })
            .collect();

        Self {
            trial: TrialRow {
                trial,
                reached:              labels.reached,
                goal_idx:             labels.goal_index as u64,
                robot_goal_x:         rgx,
                robot_goal_y:         rgy,
                filter_interventions: record.filter_interventions as u64,
                infeasible_steps:     record.infeasible_steps as u64,
            },
            trajectory: human.chain(robot).collect(),
            goals,
        }
    }
}

fn trajectory_row(
    trial:   u64,
    step:    usize,
    agent:   AgentKind,
    s:       &State,
    goal_x:  f64,
    goal_y:  f64,
    reached: Option<u8>,
) -> TrajectoryRow {
    TrajectoryRow {
        trial,
        step: step as u64,
        agent,
        px: s.px(),
        vx: s.vx(),
        py: s.py(),
        vy: s.vy(),
        goal_x,
        goal_y,
        reached,
    }
}
