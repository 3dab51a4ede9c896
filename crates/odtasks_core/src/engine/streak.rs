//! Streak engine.
//!
//! # Invariants
//! - Runs only on a qualifying completion; never on a decrement.
//! - The returned last-activity date is always `today`.
//! - Same-day completions never count twice.

use chrono::NaiveDate;

/// Streak counter and the date it was last advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    pub last_activity_date: NaiveDate,
}

/// Advances the streak for a completion happening on `today`.
///
/// - last activity yesterday: `current + 1`
/// - last activity today: `current`
/// - anything else, including unset or future dates: `1`
pub fn next_streak(
    current: u32,
    last_activity: Option<NaiveDate>,
    today: NaiveDate,
) -> StreakUpdate {
    let streak = match last_activity {
        Some(last) if Some(last) == today.pred_opt() => current.saturating_add(1),
        Some(last) if last == today => current,
        _ => 1,
    };

    StreakUpdate {
        streak,
        last_activity_date: today,
    }
}

#[cfg(test)]
mod tests {
    use super::next_streak;
    use chrono::NaiveDate;

    #[test]
    fn crosses_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let yesterday = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
        assert_eq!(next_streak(4, Some(yesterday), today).streak, 5);
    }

    #[test]
    fn future_last_activity_resets() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        assert_eq!(next_streak(7, Some(tomorrow), today).streak, 1);
    }
}
