//! Property-based invariant tests for the influence field and panel generation.
//!
//! 1. Influence at an attractor's own position equals `min(strength, 1)`
//! 2. Points outside every radius see zero influence
//! 3. Influence never increases with distance from a single attractor
//! 4. Influence never exceeds 1
//! 5. Panel count is `columns * rows`
//! 6. Panel parameters follow the linear maps
//! 7. Panel `k` sits at cell `(k / rows, k % rows)`

use glam::DVec2;
use parametric_facade::prelude::*;
use proptest::prelude::*;

const EPS: f64 = 1e-9;

// ── Strategies ──────────────────────────────────────────────────────────

fn attractor_strategy() -> impl Strategy<Value = Attractor> {
    (0.0f64..20.0, 0.0f64..15.0, -1.0f64..2.0, 0.1f64..6.0).prop_map(|(x, y, s, r)| {
        Attractor::new(DVec2::new(x, y))
            .with_strength(s)
            .with_radius(r)
    })
}

fn attractor_set_strategy() -> impl Strategy<Value = AttractorSet> {
    prop::collection::vec(attractor_strategy(), 0..8).prop_map(AttractorSet::from_iter)
}

fn config_strategy() -> impl Strategy<Value = FacadeConfig> {
    (-2.0f64..25.0, -2.0f64..25.0, 0.3f64..4.0)
        .prop_map(|(w, h, cs)| FacadeConfig::new(w, h).with_cell_size(cs))
}

// ── Influence ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn own_position_yields_clamped_strength(a in attractor_strategy()) {
        let set: AttractorSet = std::iter::once(a).collect();
        let value = set.influence_at(a.position.x, a.position.y);
        prop_assert_eq!(value, a.strength.min(1.0));
    }

    #[test]
    fn far_points_see_no_influence(
        set in attractor_set_strategy(),
        x in 40.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        prop_assert_eq!(set.influence_at(x, y), 0.0);
    }

    #[test]
    fn beyond_radius_contributes_nothing(
        a in attractor_strategy(),
        angle in 0.0f64..std::f64::consts::TAU,
        factor in 1.01f64..3.0,
    ) {
        let set: AttractorSet = std::iter::once(a).collect();
        let p = a.position + DVec2::from_angle(angle) * a.radius * factor;
        prop_assert_eq!(set.influence_at(p.x, p.y), 0.0);
    }

    #[test]
    fn influence_is_non_increasing_with_distance(
        x in 0.0f64..20.0,
        y in 0.0f64..15.0,
        strength in 0.0f64..1.0,
        radius in 0.5f64..10.0,
        angle in 0.0f64..std::f64::consts::TAU,
        d1 in 0.0f64..12.0,
        step in 0.01f64..5.0,
    ) {
        let mut set = AttractorSet::new();
        set.add(x, y, strength, radius);
        let dir = DVec2::from_angle(angle);
        let near = DVec2::new(x, y) + dir * d1;
        let far = DVec2::new(x, y) + dir * (d1 + step);
        let i_near = set.influence_at(near.x, near.y);
        let i_far = set.influence_at(far.x, far.y);
        prop_assert!(i_far <= i_near + 1e-12, "near {} far {}", i_near, i_far);
    }

    #[test]
    fn influence_never_exceeds_one(
        set in attractor_set_strategy(),
        x in -5.0f64..25.0,
        y in -5.0f64..20.0,
    ) {
        prop_assert!(set.influence_at(x, y) <= 1.0);
    }
}

// ── Panels ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn panel_count_matches_truncated_dimensions(
        cfg in config_strategy(),
        set in attractor_set_strategy(),
    ) {
        let grid = FacadeGrid::try_new(cfg).expect("cell size is positive");
        let columns = (cfg.width / cfg.cell_size).floor().max(0.0) as usize;
        let rows = (cfg.height / cfg.cell_size).floor().max(0.0) as usize;
        prop_assert_eq!(grid.columns(), columns);
        prop_assert_eq!(grid.rows(), rows);
        prop_assert_eq!(grid.generate_panels(&set).len(), columns * rows);
    }

    #[test]
    fn panels_follow_linear_maps(
        cfg in config_strategy(),
        set in attractor_set_strategy(),
    ) {
        let grid = FacadeGrid::try_new(cfg).expect("cell size is positive");
        for p in grid.generate_panels(&set) {
            prop_assert!((p.rotation - 45.0 * p.influence).abs() < EPS);
            prop_assert!((p.scale - (0.5 + 0.5 * p.influence)).abs() < EPS);
            prop_assert!((p.opacity - (0.3 + 0.7 * p.influence)).abs() < EPS);
            prop_assert_eq!(p.size, cfg.cell_size);
        }
    }

    #[test]
    fn panel_order_is_column_major(
        cfg in config_strategy(),
        set in attractor_set_strategy(),
    ) {
        let grid = FacadeGrid::try_new(cfg).expect("cell size is positive");
        let rows = grid.rows();
        let cs = grid.cell_size();
        for (k, p) in grid.generate_panels(&set).iter().enumerate() {
            let expected = DVec2::new((k / rows) as f64 * cs, (k % rows) as f64 * cs);
            prop_assert_eq!(p.position, expected);
            prop_assert_eq!(grid.cell_for_index(k), Some((k / rows, k % rows)));
        }
    }

    #[test]
    fn panel_influence_matches_center_query(
        cfg in config_strategy(),
        set in attractor_set_strategy(),
    ) {
        let grid = FacadeGrid::try_new(cfg).expect("cell size is positive");
        for p in grid.generate_panels(&set) {
            let c = p.position + DVec2::splat(cfg.cell_size / 2.0);
            prop_assert_eq!(p.influence, set.influence_at(c.x, c.y));
        }
    }
}

#[test]
fn non_positive_cell_size_is_rejected() {
    for cs in [0.0, -0.5] {
        let err = FacadeGrid::try_new(FacadeConfig::new(10.0, 10.0).with_cell_size(cs))
            .expect_err("cell size must be positive");
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
