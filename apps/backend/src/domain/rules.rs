use std::ops::RangeInclusive;

/// Length of one round in seconds. Also the `total_time` recorded on the
/// leaderboard, regardless of how long the round actually took.
pub const ROUND_SECONDS: i32 = 30;

pub const EASY_OPERANDS: RangeInclusive<i64> = 1..=10;
pub const HARD_OPERANDS: RangeInclusive<i64> = 10..=30;

/// Seconds per answered question over a full round; 0 when nothing was answered.
pub fn average_time(total_time: i32, questions_answered: u32) -> f64 {
    if questions_answered == 0 {
        return 0.0;
    }
    f64::from(total_time) / f64::from(questions_answered)
}
