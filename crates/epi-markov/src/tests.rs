//! Unit tests for epi-markov.

use epi_core::{BorderPolicy, HealthState, SimRng, VenueKind};

use crate::{DiseaseModel, HealthTransitions, Label, ModelError, MovementModel, PolicyTables, TransitionTable};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn house() -> VenueKind {
    VenueKind::house()
}

fn count_labels(row: &[Label], wanted: &Label) -> usize {
    row.iter().filter(|l| *l == wanted).count()
}

// ── TransitionTable / PolicyTables ────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn empty_table_rejected() {
        assert_eq!(TransitionTable::new().validate(), Err(ModelError::EmptyTable));
    }

    #[test]
    fn empty_row_rejected() {
        let table = TransitionTable::new().with_row("house", vec![]);
        assert_eq!(table.validate(), Err(ModelError::EmptyRow(house())));
    }

    #[test]
    fn closed_policy_only_returns_home() {
        let tables = PolicyTables::europe();
        let closed = tables.select(BorderPolicy::Closed).unwrap();
        assert_eq!(closed.row("house"), Some(&[Label::Base][..]));
        assert_eq!(closed.destinations().count(), 0);
    }

    #[test]
    fn partial_policy_reaches_nine_countries() {
        let tables = PolicyTables::europe();
        let partial = tables.select(BorderPolicy::Partial).unwrap();
        let mut kinds: Vec<_> = partial.destinations().cloned().collect();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 9);
        assert!(kinds.contains(&VenueKind::from("NL")));
        assert!(!kinds.contains(&VenueKind::from("UA")));
    }

    #[test]
    fn open_policy_weights_base_six_to_one() {
        let tables = PolicyTables::europe();
        let row = tables.select(BorderPolicy::Open).unwrap().row("house").unwrap();
        let countries = row.len() - count_labels(row, &Label::Base);
        assert_eq!(countries, 48);
        assert_eq!(count_labels(row, &Label::Base), 48 * 6);
        assert_eq!(count_labels(row, &Label::venue("DE")), 1);
        assert_eq!(count_labels(row, &Label::venue("NL")), 1);
    }

    #[test]
    fn select_fails_fast_on_degenerate_table() {
        let tables = PolicyTables {
            closed: TransitionTable::new(),
            ..PolicyTables::europe()
        };
        assert_eq!(tables.select(BorderPolicy::Closed), Err(ModelError::EmptyTable));
        assert!(tables.select(BorderPolicy::Open).is_ok());
    }
}

// ── MovementModel ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn rejects_empty_table() {
        assert!(MovementModel::new(TransitionTable::new()).is_err());
    }

    #[test]
    fn house_is_sticky() {
        let table = TransitionTable::new().with_row("house", vec![Label::venue("NL")]);
        let model = MovementModel::new(table).unwrap();
        let mut rng = SimRng::new(1);
        let trials = 20_000;
        let stays = (0..trials)
            .filter(|_| model.next_target(&house(), &mut rng) == Label::Stay)
            .count();
        let observed = stays as f64 / trials as f64;
        assert!((observed - 0.9).abs() < 0.01, "got {observed}");
    }

    #[test]
    fn stickiness_outside_unit_interval_rejected() {
        let model = || MovementModel::new(TransitionTable::new().with_row("house", vec![Label::Base])).unwrap();
        assert!(matches!(
            model().with_home_stickiness(f64::NAN),
            Err(ModelError::InvalidProbability(p)) if p.is_nan()
        ));
        assert_eq!(
            model().with_home_stickiness(1.5).map(|_| ()),
            Err(ModelError::InvalidProbability(1.5))
        );
        assert!(model().with_home_stickiness(1.0).is_ok());
    }

    #[test]
    fn non_house_skips_stickiness() {
        let table = TransitionTable::new().with_row("camp", vec![Label::Base]);
        let model = MovementModel::new(table).unwrap();
        let mut rng = SimRng::new(1);
        for _ in 0..500 {
            assert_eq!(model.next_target(&VenueKind::from("camp"), &mut rng), Label::Base);
        }
    }

    #[test]
    fn unknown_class_stays() {
        let model = MovementModel::new(TransitionTable::new().with_row("house", vec![Label::Base])).unwrap();
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            assert_eq!(model.next_target(&VenueKind::from("NL"), &mut rng), Label::Stay);
        }
    }

    #[test]
    fn repeated_labels_carry_weight() {
        let row = vec![Label::Base, Label::Base, Label::Base, Label::venue("NL")];
        let model = MovementModel::new(TransitionTable::new().with_row("house", row))
            .unwrap()
            .with_home_stickiness(0.0)
            .unwrap();
        let mut rng = SimRng::new(11);
        let trials = 40_000;
        let nl = (0..trials)
            .filter(|_| model.next_target(&house(), &mut rng) == Label::venue("NL"))
            .count();
        let observed = nl as f64 / trials as f64;
        assert!((observed - 0.25).abs() < 0.02, "got {observed}");
    }

    #[test]
    fn closed_table_never_yields_a_venue() {
        let tables = PolicyTables::europe();
        let model = MovementModel::new(tables.select(BorderPolicy::Closed).unwrap().clone()).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..5_000 {
            let label = model.next_target(&house(), &mut rng);
            assert!(matches!(label, Label::Stay | Label::Base), "got {label}");
        }
    }
}

// ── Disease model ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod disease_tests {
    use super::*;

    #[test]
    fn baseline_is_valid() {
        assert!(HealthTransitions::baseline().validate().is_ok());
        assert!(DiseaseModel::new(0.3, HealthTransitions::baseline()).is_ok());
    }

    #[test]
    fn rejects_unnormalised_row() {
        let t = HealthTransitions::identity()
            .with_row(HealthState::Sick, vec![(0.5, HealthState::Sick)]);
        assert!(matches!(
            t.validate(),
            Err(ModelError::InvalidDistribution { state: HealthState::Sick, .. })
        ));
    }

    #[test]
    fn rejects_resurrection() {
        let t = HealthTransitions::identity()
            .with_row(HealthState::Dead, vec![(1.0, HealthState::Susceptible)]);
        assert!(t.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_transmission() {
        assert_eq!(
            DiseaseModel::new(1.5, HealthTransitions::baseline()),
            Err(ModelError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn absorbing_states_never_change() {
        let model = DiseaseModel::baseline();
        let mut rng = SimRng::new(8);
        for state in [HealthState::Recovered, HealthState::Dead] {
            for _ in 0..1_000 {
                assert_eq!(model.progress(state, &mut rng), state);
                assert_eq!(model.spread(state, 0, &mut rng), state);
            }
        }
    }

    #[test]
    fn susceptible_does_not_progress() {
        let model = DiseaseModel::baseline();
        let mut rng = SimRng::new(8);
        for _ in 0..1_000 {
            assert_eq!(model.progress(HealthState::Susceptible, &mut rng), HealthState::Susceptible);
        }
    }

    #[test]
    fn sick_spread_is_identity() {
        let model = DiseaseModel::baseline();
        let mut rng = SimRng::new(8);
        for _ in 0..1_000 {
            assert_eq!(model.spread(HealthState::Sick, 50, &mut rng), HealthState::Sick);
        }
    }

    #[test]
    fn mask_effective_probability() {
        let model = DiseaseModel::baseline();
        assert!((model.effective_transmission(0) - 0.3).abs() < 1e-12);
        assert!((model.effective_transmission(100) - 0.3 * 3.0 / 103.0).abs() < 1e-12);
        assert!((model.effective_transmission(100) - 0.00874).abs() < 1e-5);
    }

    #[test]
    fn mask_scales_non_default_transmission() {
        let model = DiseaseModel::new(0.6, HealthTransitions::baseline()).unwrap();
        assert!((model.effective_transmission(50) - 0.6 * (1.0 - 50.0 / 103.0)).abs() < 1e-12);
    }

    fn spread_rate(model: &DiseaseModel, mask: u8, trials: usize) -> f64 {
        let mut rng = SimRng::new(31);
        let sick = (0..trials)
            .filter(|_| model.spread(HealthState::Susceptible, mask, &mut rng) == HealthState::Sick)
            .count();
        sick as f64 / trials as f64
    }

    #[test]
    fn spread_rate_without_masks() {
        let observed = spread_rate(&DiseaseModel::baseline(), 0, 100_000);
        assert!((observed - 0.3).abs() < 0.01, "got {observed}");
    }

    #[test]
    fn spread_rate_with_full_masks() {
        let observed = spread_rate(&DiseaseModel::baseline(), 100, 100_000);
        assert!((observed - 0.00874).abs() < 0.002, "got {observed}");
    }

    #[test]
    fn sick_progression_frequencies() {
        let model = DiseaseModel::baseline();
        let mut rng = SimRng::new(99);
        let trials = 100_000;
        let mut recovered = 0;
        let mut dead = 0;
        for _ in 0..trials {
            match model.progress(HealthState::Sick, &mut rng) {
                HealthState::Recovered => recovered += 1,
                HealthState::Dead => dead += 1,
                _ => {}
            }
        }
        assert!((recovered as f64 / trials as f64 - 0.004).abs() < 0.002);
        assert!((dead as f64 / trials as f64 - 0.001).abs() < 0.001);
    }

    #[test]
    fn spread_row_sums_to_one() {
        let model = DiseaseModel::baseline();
        let row = model.spread_row(HealthState::Susceptible, 40);
        let total: f64 = row.iter().map(|(p, _)| p).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(model.spread_row(HealthState::Dead, 40), vec![(1.0, HealthState::Dead)]);
    }
}
