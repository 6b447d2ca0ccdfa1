use super::*;

// =============================================================
// ease_out_cubic
// =============================================================

#[test]
fn ease_out_cubic_hits_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
}

#[test]
fn ease_out_cubic_front_loads_progress() {
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    assert!(ease_out_cubic(0.25) > 0.25);
}

#[test]
fn ease_out_cubic_clamps_out_of_range_input() {
    assert_eq!(ease_out_cubic(-0.5), 0.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
}

// =============================================================
// Tween
// =============================================================

#[test]
fn tween_ends_exactly_on_target() {
    for target in [0_u64, 1, 3, 45, 120, 9_999] {
        for duration in [1.0, 16.0, 650.0, 1_800.0] {
            let tween = Tween::new(0, target, 100.0, duration);
            assert_eq!(tween.value_at(100.0 + duration), target);
            assert_eq!(tween.value_at(100.0 + duration * 4.0), target);
        }
    }
}

#[test]
fn tween_starts_at_start_value() {
    let tween = Tween::new(120, 123, 50.0, 650.0);
    assert_eq!(tween.value_at(50.0), 120);
    assert_eq!(tween.value_at(0.0), 120);
}

#[test]
fn tween_increasing_is_monotonic_and_never_overshoots() {
    let tween = Tween::new(8, 250, 0.0, 900.0);
    let mut last = tween.value_at(0.0);
    for step in 0..=120 {
        let value = tween.value_at(f64::from(step) * 8.0);
        assert!(value >= last, "value dropped from {last} to {value}");
        assert!(value <= 250);
        last = value;
    }
    assert_eq!(last, 250);
}

#[test]
fn tween_decreasing_is_monotonic_and_never_undershoots() {
    let tween = Tween::new(300, 12, 0.0, 1_000.0);
    let mut last = tween.value_at(0.0);
    for step in 0..=125 {
        let value = tween.value_at(f64::from(step) * 8.0);
        assert!(value <= last, "value rose from {last} to {value}");
        assert!(value >= 12);
        last = value;
    }
    assert_eq!(last, 12);
}

#[test]
fn tween_midpoint_uses_floor_of_eased_value() {
    let tween = Tween::new(0, 100, 0.0, 1_000.0);
    // eased(0.5) = 0.875
    assert_eq!(tween.value_at(500.0), 87);
}

#[test]
fn tween_with_zero_duration_is_immediately_finished() {
    let tween = Tween::new(4, 9, 10.0, 0.0);
    assert!(tween.is_finished(10.0));
    assert_eq!(tween.value_at(10.0), 9);
}

#[test]
fn tween_progress_is_clamped() {
    let tween = Tween::new(0, 10, 100.0, 200.0);
    assert_eq!(tween.progress(50.0), 0.0);
    assert_eq!(tween.progress(200.0), 0.5);
    assert_eq!(tween.progress(1_000.0), 1.0);
    assert!(!tween.is_finished(299.0));
    assert!(tween.is_finished(300.0));
}
