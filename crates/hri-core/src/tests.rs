//! Unit tests for hri-core primitives.

#[cfg(test)]
mod state {
    use crate::{Control, Goal, HriError, State};

    #[test]
    fn from_slice_checks_dimension() {
        let s = State::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s, State::new(1.0, 2.0, 3.0, 4.0));
        assert!(matches!(
            State::from_slice(&[1.0, 2.0]),
            Err(HriError::Dimension { expected: 4, got: 2, .. })
        ));
    }

    #[test]
    fn goal_velocity_is_always_zero() {
        let g = Goal::from_state(State::new(3.0, 9.0, -2.0, -7.0));
        assert_eq!(g.as_state().velocity(), [0.0, 0.0]);
        assert_eq!(g.position(), [3.0, -2.0]);

        let g = Goal::from_slice(&[1.0, 5.0, 2.0, 5.0]).unwrap();
        assert_eq!(*g.as_state(), State::at_rest(1.0, 2.0));
    }

    #[test]
    fn distances() {
        let a = State::new(0.0, 0.0, 0.0, 0.0);
        let b = State::new(3.0, 1.0, 4.0, 1.0);
        assert!((a.position_distance(&b) - 5.0).abs() < 1e-12);
        assert!((a.distance(&b) - 27.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn saturate_preserves_direction() {
        let u = Control::new(30.0, 40.0).saturate(10.0);
        assert!((u.norm() - 10.0).abs() < 1e-12);
        assert!((u.ax() / u.ay() - 0.75).abs() < 1e-12);
        assert_eq!(Control::new(1.0, 1.0).saturate(10.0), Control::new(1.0, 1.0));
        assert_eq!(Control::ZERO.saturate(0.5), Control::ZERO);
    }

    #[test]
    fn clamp_box_is_per_component() {
        let u = Control::new(-20.0, 3.0).clamp_box(5.0);
        assert_eq!(u, Control::new(-5.0, 3.0));
    }
}

#[cfg(test)]
mod dynamics {
    use crate::{Control, DynamicsModel, Gains, Goal, State};

    #[test]
    fn rejects_bad_timestep() {
        assert!(DynamicsModel::new(0.0).is_err());
        assert!(DynamicsModel::new(-0.1).is_err());
        assert!(DynamicsModel::new(f64::NAN).is_err());
        assert!(DynamicsModel::new(0.1).is_ok());
    }

    #[test]
    fn rejects_unstable_timestep() {
        assert!(DynamicsModel::new(0.99).is_ok());
        for ts in [1.0, 1.5, 2.0] {
            assert!(DynamicsModel::new(ts).is_err(), "ts={ts}");
        }
        let stiff = Gains { kp: 10.0, kd: 2.0, ..Gains::default() };
        assert!(DynamicsModel::with_gains(0.5, stiff).is_err());
        assert!(DynamicsModel::with_gains(0.1, stiff).is_ok());
    }

    #[test]
    fn spectral_radius_matches_stability() {
        let g = Gains::default();
        for ts in [0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.99] {
            assert!(g.is_stable(ts));
            assert!(g.spectral_radius(ts) < 1.0, "ts={ts}");
        }
        assert!((g.spectral_radius(1.0) - 1.0).abs() < 1e-12);
        assert!(!g.is_stable(1.0));
        assert!(g.spectral_radius(1.5) > 1.0);
        assert!(!g.is_stable(1.5));
    }

    #[test]
    fn rejects_bad_gains() {
        let gains = Gains { max_accel: 0.0, ..Gains::default() };
        assert!(DynamicsModel::with_gains(0.1, gains).is_err());
    }

    #[test]
    fn exposes_dimensions() {
        assert_eq!(DynamicsModel::STATE_DIM, 4);
        assert_eq!(DynamicsModel::CONTROL_DIM, 2);
    }

    #[test]
    fn step_integrates_velocity_and_acceleration() {
        let dyn_ = DynamicsModel::new(0.1).unwrap();
        let next = dyn_.step(&State::new(1.0, 2.0, -1.0, 0.0), &Control::new(0.0, 4.0));
        assert!((next.px() - 1.2).abs() < 1e-12);
        assert!((next.vx() - 2.0).abs() < 1e-12);
        assert!((next.py() - (-1.0 + 0.5 * 0.01 * 4.0)).abs() < 1e-12);
        assert!((next.vy() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn step_is_linear() {
        let dyn_ = DynamicsModel::new(0.05).unwrap();
        let x = State::new(1.0, -2.0, 0.5, 3.0);
        let u = Control::new(2.0, -1.0);
        let a = dyn_.step(&x, &u);
        let b = dyn_.step(&State::new(2.0, -4.0, 1.0, 6.0), &Control::new(4.0, -2.0));
        for i in 0..4 {
            assert!((2.0 * a.0[i] - b.0[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn step_is_reproducible() {
        let dyn_ = DynamicsModel::new(0.05).unwrap();
        let x = State::new(0.1, 0.2, 0.3, 0.4);
        let u = Control::new(0.7, -0.3);
        assert_eq!(dyn_.step(&x, &u).0, dyn_.step(&x, &u).0);
    }

    #[test]
    fn goal_control_is_zero_at_goal() {
        let dyn_ = DynamicsModel::new(0.1).unwrap();
        let goal = Goal::at(3.0, -4.0);
        let u = dyn_.get_goal_control(goal.as_state(), &goal);
        assert_eq!(u.norm(), 0.0);
    }

    #[test]
    fn goal_control_respects_max_accel() {
        let dyn_ = DynamicsModel::new(0.1).unwrap();
        let u = dyn_.get_goal_control(&State::at_rest(-10.0, -10.0), &Goal::at(10.0, 10.0));
        assert!(u.norm() <= dyn_.max_accel() + 1e-12);
    }

    #[test]
    fn goal_control_is_continuous() {
        let dyn_ = DynamicsModel::new(0.1).unwrap();
        let goal = Goal::at(1.0, 1.0);
        let x = State::new(0.5, 0.1, 0.5, -0.1);
        let y = State::new(0.5 + 1e-9, 0.1, 0.5, -0.1 + 1e-9);
        let du = dyn_.get_goal_control(&x, &goal).distance(&dyn_.get_goal_control(&y, &goal));
        assert!(du < 1e-7);
    }

    /// Repeated goal-seeking steps converge from a grid of initial states at
    /// every accepted timestep.
    #[test]
    fn converges_to_goal() {
        for ts in [0.05, 0.1, 0.25, 0.5, 0.75, 0.9] {
            let dyn_ = DynamicsModel::new(ts).unwrap();
            let goal = Goal::at(5.0, -3.0);
            for &(px, py, vx, vy) in &[
                (-10.0, -10.0, 0.0, 0.0),
                (10.0, 10.0, 3.0, -2.0),
                (5.0, -3.0, 4.0, 4.0),
                (0.0, 0.0, -5.0, 5.0),
            ] {
                let mut x = State::new(px, vx, py, vy);
                let steps = (40.0 / ts) as usize;
                for _ in 0..steps {
                    x = dyn_.step_toward(&x, &goal);
                }
                assert!(x.position_distance(goal.as_state()) < 1e-3, "ts={ts} x={x}");
                assert!(x.speed() < 1e-3, "ts={ts} x={x}");
            }
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{HriError, SimConfig};

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_zero_horizon() {
        let c = SimConfig { horizon: 0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_dmin() {
        let c = SimConfig { dmin: 0.0, ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_unstable_timestep() {
        let c = SimConfig { ts: 1.0, ..SimConfig::default() };
        assert!(matches!(c.validate(), Err(HriError::Config(_))));
        let c = SimConfig { ts: 0.9, ..SimConfig::default() };
        c.validate().unwrap();
    }

    #[test]
    fn rejects_zero_threads() {
        let c = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn duration() {
        let c = SimConfig { ts: 0.1, horizon: 200, ..SimConfig::default() };
        assert!((c.duration_secs() - 20.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, TrialRng};

    #[test]
    fn trial_rng_is_deterministic() {
        let mut a = TrialRng::new(7, 3);
        let mut b = TrialRng::new(7, 3);
        for _ in 0..16 {
            assert_eq!(a.position(10.0), b.position(10.0));
            assert_eq!(a.index(5), b.index(5));
        }
    }

    #[test]
    fn trials_get_distinct_streams() {
        let mut a = TrialRng::new(7, 0);
        let mut b = TrialRng::new(7, 1);
        assert_ne!(a.position(10.0), b.position(10.0));
    }

    #[test]
    fn position_stays_in_domain() {
        let mut r = TrialRng::new(1, 0);
        for _ in 0..1000 {
            let (x, y) = r.position(10.0);
            assert!((-10.0..=10.0).contains(&x));
            assert!((-10.0..=10.0).contains(&y));
        }
    }

    #[test]
    fn index_handles_empty() {
        let mut r = TrialRng::new(1, 0);
        assert_eq!(r.index(0), None);
        assert!(r.index(3).unwrap() < 3);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let mut a: Vec<usize> = (0..20).collect();
        let mut b = a.clone();
        SimRng::new(5).shuffle(&mut a);
        SimRng::new(5).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut r = SimRng::new(9);
        let mut v: Vec<usize> = (0..20).collect();
        r.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
