// Host-side tests for the burner layout engine.

use rand::prelude::*;
use wok_core::*;

const EPS: f32 = 1e-4;

fn params(diameters: &[u32], style: ConstructionStyle) -> LayoutParams {
    LayoutParams::new(
        diameters.iter().map(|&d| d as f32),
        DEFAULT_MIN_GAP_IN,
        DEFAULT_UNIT_SCALE,
        style,
    )
}

fn random_params(rng: &mut StdRng) -> LayoutParams {
    let count = rng.gen_range(MIN_BURNERS..=MAX_BURNERS);
    let diameters = (0..count)
        .map(|_| *BURNER_DIAMETERS_IN.choose(rng).unwrap_or(&15) as f32)
        .collect::<Vec<_>>();
    let scale = rng.gen_range(UNIT_SCALE_MIN..=UNIT_SCALE_MAX);
    let style = if rng.gen::<bool>() {
        ConstructionStyle::California
    } else {
        ConstructionStyle::NewYork
    };
    LayoutParams::new(diameters, DEFAULT_MIN_GAP_IN, scale, style)
}

#[test]
fn one_slot_per_burner_with_no_overlap() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let p = random_params(&mut rng);
        let layout = compute_layout(&p);
        assert_eq!(layout.burners.len(), p.diameters_in.len());
        for b in &layout.burners {
            assert!(b.radius >= 0.0);
            assert!(b.radius <= b.declared_radius);
        }
        let gap = p.min_gap_in * p.scale;
        for pair in layout.burners.windows(2) {
            let spacing = pair[1].x - pair[0].x;
            let needed = gap + pair[0].radius + pair[1].radius;
            assert!(
                spacing + EPS >= needed,
                "slots overlap: spacing {spacing} < {needed}"
            );
        }
    }
}

#[test]
fn unclamped_centers_are_exactly_one_gap_apart() {
    let p = params(&[13, 15, 17, 19], ConstructionStyle::California);
    let layout = compute_layout(&p);
    let gap = p.min_gap_in * p.scale;
    for pair in layout.burners.windows(2) {
        assert!(!pair[0].is_clamped() && !pair[1].is_clamped());
        let expected = gap + pair[0].radius + pair[1].radius;
        assert!(((pair[1].x - pair[0].x) - expected).abs() < EPS);
    }
}

#[test]
fn burners_are_centered_inside_side_padding() {
    let p = params(&[13, 15, 13], ConstructionStyle::NewYork);
    let layout = compute_layout(&p);
    let pad = SIDE_PADDING_IN * p.scale;
    let half = layout.chassis.width * 0.5;
    let first = layout.burners[0];
    let last = layout.burners[2];
    assert!((first.x - first.declared_radius - (-half + pad)).abs() < EPS);
    assert!((last.x + last.declared_radius - (half - pad)).abs() < EPS);
    // 13-15-13 is symmetric, so the middle burner sits on the origin
    assert!(layout.burners[1].x.abs() < EPS);
}

#[test]
fn multi_burner_row_sits_half_a_lip_toward_the_rear() {
    let p = params(&[15, 15], ConstructionStyle::California);
    let layout = compute_layout(&p);
    let z = -p.lip_height_in * p.scale * 0.5;
    for b in &layout.burners {
        assert!((b.z - z).abs() < EPS);
    }
}

#[test]
fn layout_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let p = random_params(&mut rng);
        assert_eq!(compute_layout(&p), compute_layout(&p));
    }
}

#[test]
fn single_burner_sits_on_origin() {
    for size in BURNER_DIAMETERS_IN {
        for style in [ConstructionStyle::California, ConstructionStyle::NewYork] {
            let layout = compute_layout(&params(&[size], style));
            assert_eq!(layout.burners.len(), 1);
            assert_eq!(layout.burners[0].x, 0.0);
            assert_eq!(layout.burners[0].z, 0.0);
            assert_eq!(layout.faucets.len(), 1);
            assert_eq!(layout.faucets[0].x, 0.0);
        }
    }
}

#[test]
fn california_has_one_faucet_per_burner() {
    for n in MIN_BURNERS..=MAX_BURNERS {
        let layout = compute_layout(&params(&vec![15; n], ConstructionStyle::California));
        assert_eq!(layout.faucets.len(), n);
        for (f, b) in layout.faucets.iter().zip(&layout.burners) {
            assert_eq!(f.x, b.x);
        }
    }
}

#[test]
fn newyork_shares_faucets_between_adjacent_pairs() {
    for n in MIN_BURNERS..=MAX_BURNERS {
        let layout = compute_layout(&params(&vec![17; n], ConstructionStyle::NewYork));
        assert_eq!(layout.faucets.len(), n.saturating_sub(1).max(1));
    }
    let layout = compute_layout(&params(&[13, 21, 15], ConstructionStyle::NewYork));
    let b = &layout.burners;
    assert!((layout.faucets[0].x - (b[0].x + b[1].x) * 0.5).abs() < EPS);
    assert!((layout.faucets[1].x - (b[1].x + b[2].x) * 0.5).abs() < EPS);
}

#[test]
fn oversize_wells_are_clamped_to_usable_depth() {
    // 30" deep, 4" lip, 1" margin leaves a 10" usable radius
    let p = params(&[21, 19], ConstructionStyle::California);
    let layout = compute_layout(&p);
    let clamp = usable_half_depth_clamp(CHASSIS_DEPTH_IN, LIP_HEIGHT_IN, p.scale);
    assert!((clamp - 10.0 * p.scale).abs() < EPS);
    assert!(layout.burners[0].is_clamped());
    assert!((layout.burners[0].radius - clamp).abs() < EPS);
    assert!(!layout.burners[1].is_clamped());
}

#[test]
fn clamp_never_goes_negative() {
    assert_eq!(usable_half_depth_clamp(4.0, 4.0, 0.5), 0.0);
}

#[test]
fn chassis_width_matches_required_width_scaled() {
    let p = params(&[13, 15, 13], ConstructionStyle::California);
    let layout = compute_layout(&p);
    assert!((layout.required_width_in - 51.0).abs() < EPS);
    assert!((layout.chassis.width - 51.0 * p.scale).abs() < EPS);
}

#[test]
fn empty_burner_list_does_not_break_the_width_formula() {
    assert_eq!(required_width_inches(&[], DEFAULT_MIN_GAP_IN), 2.0 * SIDE_PADDING_IN);
    let p = params(&[], ConstructionStyle::NewYork);
    let layout = compute_layout(&p);
    assert!(layout.burners.is_empty());
    assert!(layout.faucets.is_empty());
}

#[test]
fn legs_come_in_two_rows_within_the_chassis() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let p = random_params(&mut rng);
        let layout = compute_layout(&p);
        let c = &layout.chassis;
        assert!(layout.legs.len() >= 4);
        assert_eq!(layout.legs.len() % 2, 0);
        for leg in &layout.legs {
            assert!(leg.x.abs() <= c.width * 0.5 + EPS);
            assert!(leg.z.abs() <= c.depth * 0.5 + EPS);
        }
        let per_row = layout.legs.len() / 2;
        let max_span = MAX_LEG_SPAN_IN * p.scale;
        for row in layout.legs.chunks(per_row) {
            for pair in row.windows(2) {
                assert!(pair[1].x - pair[0].x <= max_span + EPS);
            }
        }
    }
}

#[test]
fn six_wide_range_gets_extra_legs() {
    let layout = compute_layout(&params(&[19; 6], ConstructionStyle::California));
    // 114 + 20 + 2 = 136" wide, 132" between the end legs
    assert!((layout.required_width_in - 136.0).abs() < EPS);
    assert_eq!(layout.legs.len(), 2 * 4);
}

#[test]
fn heights_stack_from_floor_to_lip() {
    let layout = compute_layout(&params(&[15, 15], ConstructionStyle::California));
    let c = &layout.chassis;
    let tray_top = c.tray_center_y + c.tray_thickness * 0.5;
    assert!((c.leg_height + c.tray_thickness - tray_top).abs() < EPS);
    assert!((tray_top + c.lip_height - c.back_height).abs() < EPS);
    assert!(c.faucet_y > tray_top);
}

#[test]
fn unit_conversion_is_linear() {
    assert_eq!(to_scene_units(10.0, 0.5), 5.0);
    assert_eq!(to_scene_units(10.0, 0.0), 0.0);
    assert!(to_scene_units(10.0, -1.0) < 0.0);
}

#[test]
fn off_schedule_diameters_and_gaps_still_lay_out() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let count = rng.gen_range(MIN_BURNERS..=MAX_BURNERS);
        let diameters = (0..count)
            .map(|_| rng.gen_range(1e-3_f32..1e6))
            .collect::<Vec<_>>();
        let gap = rng.gen_range(1e-3_f32..1e6);
        let scale = rng.gen_range(UNIT_SCALE_MIN..=UNIT_SCALE_MAX);
        let p = LayoutParams::new(diameters, gap, scale, ConstructionStyle::NewYork);
        let layout = compute_layout(&p);
        assert_eq!(layout.burners.len(), count);
        assert!(layout.burners.iter().all(|b| b.radius >= 0.0));
        assert!(layout.legs.len() >= 4);
        assert!(layout.legs.len() <= 2 * MAX_LEGS_PER_ROW);
    }
}

#[test]
fn huge_inputs_cap_the_leg_count() {
    let wide = LayoutParams::new([1e30, 15.0], 4.0, 0.1, ConstructionStyle::California);
    let layout = compute_layout(&wide);
    assert_eq!(layout.burners.len(), 2);
    assert_eq!(layout.legs.len(), 2 * MAX_LEGS_PER_ROW);

    let gappy = LayoutParams::new([15.0, 15.0, 15.0], 1e30, 1.0, ConstructionStyle::NewYork);
    let layout = compute_layout(&gappy);
    assert_eq!(layout.burners.len(), 3);
    assert_eq!(layout.faucets.len(), 2);
    assert_eq!(layout.legs.len(), 2 * MAX_LEGS_PER_ROW);
}
