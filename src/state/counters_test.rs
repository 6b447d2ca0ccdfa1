use super::*;

fn analytics_board(seed: u64) -> CounterBoard {
    let mut board = CounterBoard::new(seed);
    board.insert(CounterKey::Analytics(AnalyticsCounter::Visitors), 120);
    board.insert(CounterKey::Analytics(AnalyticsCounter::ProjectsViewed), 8);
    board.insert(CounterKey::Analytics(AnalyticsCounter::ResumeDownloads), 3);
    board.insert(CounterKey::Analytics(AnalyticsCounter::SkillsViews), 45);
    board
}

fn run_to_end(board: &mut CounterBoard, ticket: AnimationTicket, from_ms: f64, duration_ms: f64) {
    let mut now = from_ms;
    while board.tick(ticket, now) {
        now += 16.0;
        assert!(now <= from_ms + duration_ms + 32.0, "animation overran its duration");
    }
}

// =============================================================
// AnalyticsCounter
// =============================================================

#[test]
fn analytics_counters_map_to_dom_ids() {
    let ids = AnalyticsCounter::ALL.map(AnalyticsCounter::dom_id);
    assert_eq!(ids, ["visitors", "projectsViewed", "resumeDownloads", "skillsViews"]);
}

#[test]
fn bump_ranges_stay_small_and_positive() {
    assert_eq!(AnalyticsCounter::Visitors.bump_range(), 1..=3);
    for which in AnalyticsCounter::ALL {
        assert!(*which.bump_range().start() >= 1);
        assert!(*which.bump_range().end() <= 3);
    }
}

// =============================================================
// start / tick
// =============================================================

#[test]
fn unknown_counter_is_skipped() {
    let mut board = CounterBoard::new(1);
    assert_eq!(board.start(CounterKey::Stat(9), 10, 500.0, 0.0), None);
    assert_eq!(board.value(CounterKey::Stat(9)), 0);
}

#[test]
fn animation_lands_exactly_on_target() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 0);
    let ticket = board.start(key, 137, 900.0, 1_000.0).expect("registered counter");
    run_to_end(&mut board, ticket, 1_000.0, 900.0);
    assert_eq!(board.value(key), 137);
    assert!(!board.get(key).is_some_and(Counter::is_animating));
}

#[test]
fn animation_starts_from_current_displayed_value() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 40);
    let ticket = board.start(key, 50, 650.0, 0.0).expect("registered counter");
    assert!(board.tick(ticket, 0.0));
    assert_eq!(board.value(key), 40);
}

#[test]
fn animation_is_monotonic_while_ticking() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(1);
    board.insert(key, 500);
    let ticket = board.start(key, 20, 1_000.0, 0.0).expect("registered counter");
    let mut last = board.value(key);
    let mut now = 0.0;
    while board.tick(ticket, now) {
        assert!(board.value(key) <= last);
        last = board.value(key);
        now += 10.0;
    }
    assert_eq!(board.value(key), 20);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 2);
    let ticket = board.start(key, 9, 0.0, 5.0).expect("registered counter");
    assert_eq!(board.value(key), 9);
    assert!(!board.tick(ticket, 5.0));
}

#[test]
fn start_from_zero_resets_display_first() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(2);
    board.insert(key, 24);
    let ticket = board.start_from_zero(key, 24, 900.0, 0.0).expect("registered counter");
    assert_eq!(board.value(key), 0);
    run_to_end(&mut board, ticket, 0.0, 900.0);
    assert_eq!(board.value(key), 24);
}

// =============================================================
// cancel-and-replace
// =============================================================

#[test]
fn new_animation_supersedes_in_flight_one() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 0);
    let first = board.start(key, 100, 1_000.0, 0.0).expect("registered counter");
    assert!(board.tick(first, 400.0));
    let shown = board.value(key);

    let second = board.start(key, 10, 500.0, 400.0).expect("registered counter");
    assert!(!board.tick(first, 450.0), "stale ticket must stop");
    assert_eq!(board.value(key), shown, "stale ticket must not write");

    run_to_end(&mut board, second, 400.0, 500.0);
    assert_eq!(board.value(key), 10);
}

#[test]
fn restart_cancels_the_running_frame_loop() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 0);
    let first = board.start(key, 100, 1_000.0, 0.0).expect("registered counter");
    let first_loop = FrameHandle::default();
    board.attach(first, first_loop.clone());
    assert!(!first_loop.is_cancelled());

    let second = board.start(key, 50, 1_000.0, 200.0).expect("registered counter");
    assert!(first_loop.is_cancelled(), "replaced loop must be cancelled");

    let second_loop = FrameHandle::default();
    board.attach(second, second_loop.clone());
    assert!(!second_loop.is_cancelled());
}

#[test]
fn attaching_a_stale_ticket_cancels_its_loop() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 0);
    let stale = board.start(key, 100, 1_000.0, 0.0).expect("registered counter");
    board.start(key, 40, 1_000.0, 0.0).expect("registered counter");

    let late = FrameHandle::default();
    board.attach(stale, late.clone());
    assert!(late.is_cancelled());
}

#[test]
fn finished_animation_drops_its_loop() {
    let mut board = CounterBoard::new(1);
    let key = CounterKey::Stat(0);
    board.insert(key, 0);
    let ticket = board.start(key, 30, 300.0, 0.0).expect("registered counter");
    let running = FrameHandle::default();
    board.attach(ticket, running.clone());
    run_to_end(&mut board, ticket, 0.0, 300.0);

    // A later restart has nothing left to cancel.
    board.start(key, 60, 300.0, 400.0).expect("registered counter");
    assert!(!running.is_cancelled());
}

// =============================================================
// bump_analytics
// =============================================================

#[test]
fn bump_analytics_raises_each_counter_by_one_to_three() {
    for seed in 0..50 {
        let mut board = analytics_board(seed);
        let before = AnalyticsCounter::ALL.map(|c| board.value(CounterKey::Analytics(c)));
        let tickets = board.bump_analytics(650.0, 0.0);
        assert_eq!(tickets.len(), 4);
        for ticket in tickets {
            run_to_end(&mut board, ticket, 0.0, 650.0);
        }
        for (which, old) in AnalyticsCounter::ALL.into_iter().zip(before) {
            let new = board.value(CounterKey::Analytics(which));
            assert!(new > old && new <= old + 3, "{which:?}: {old} -> {new}");
            assert!(which.bump_range().contains(&(new - old)));
        }
    }
}

#[test]
fn bump_analytics_during_animation_builds_on_target() {
    let mut board = analytics_board(3);
    let key = CounterKey::Analytics(AnalyticsCounter::Visitors);
    board.bump_analytics(650.0, 0.0);
    let first_target = board.get(key).map_or(0, Counter::target);
    board.bump_analytics(650.0, 100.0);
    let second_target = board.get(key).map_or(0, Counter::target);
    assert!(second_target > first_target);
}

#[test]
fn bump_analytics_skips_unregistered_counters() {
    let mut board = CounterBoard::new(5);
    board.insert(CounterKey::Analytics(AnalyticsCounter::SkillsViews), 45);
    let tickets = board.bump_analytics(650.0, 0.0);
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].key, CounterKey::Analytics(AnalyticsCounter::SkillsViews));
}

#[test]
fn analytics_intro_duration_stays_in_window() {
    let mut board = CounterBoard::new(11);
    for _ in 0..100 {
        let ms = board.analytics_intro_ms();
        assert!((1_000.0..1_800.0).contains(&ms));
    }
}
