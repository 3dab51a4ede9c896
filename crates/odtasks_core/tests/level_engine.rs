use odtasks_core::{level_for, level_progress, LEVEL_THRESHOLDS, MAX_LEVEL};

#[test]
fn zero_xp_is_level_one() {
    assert_eq!(level_for(0), 1);
}

#[test]
fn each_threshold_unlocks_its_level() {
    for (index, threshold) in LEVEL_THRESHOLDS.iter().enumerate() {
        assert_eq!(level_for(*threshold), index as u32 + 1, "threshold {threshold}");
    }
}

#[test]
fn level_is_monotonic_and_bounded() {
    let mut previous = level_for(0);
    for xp in (0..40_000_u64).step_by(37) {
        let level = level_for(xp);
        assert!(level >= previous, "level dropped at xp={xp}");
        assert!((1..=MAX_LEVEL).contains(&level));
        previous = level;
    }
}

#[test]
fn xp_past_the_table_clamps_at_max_level() {
    assert_eq!(level_for(22_000), MAX_LEVEL);
    assert_eq!(level_for(30_000), MAX_LEVEL);
    assert_eq!(level_for(u64::MAX), MAX_LEVEL);
    assert_eq!(level_progress(u64::MAX).next_xp, None);
}

#[test]
fn five_hundred_xp_reaches_level_two() {
    assert_eq!(level_for(499), 1);
    assert_eq!(level_for(500), 2);
    assert_eq!(level_for(1_499), 2);
    assert_eq!(level_for(1_500), 3);
}
