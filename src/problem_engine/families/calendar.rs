//! Weekday problems: a holiday span inside one week, and a delay that wraps
//! around the week.

use crate::error::ProblemError;
use crate::problem_engine::{
    helpers::{instance, weekday},
    models::{Params, ProblemInstance},
    random::RandomSource,
};

// ---------------------------------------------------------------------------
// Holiday-Span
// ---------------------------------------------------------------------------

pub fn generate_holiday<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let start_idx = rng.uniform_int(0, 3); // Monday..Thursday
    let duration = rng.uniform_int(2, 4);
    Ok(holiday(id, start_idx, duration))
}

/// `start_idx` is 0-based; the instance reports 1-based day numbers.
/// Expects `duration >= 1`.
pub fn holiday(id: String, start_idx: u32, duration: u32) -> ProblemInstance {
    debug_assert!(duration >= 1, "a holiday lasts at least one day");
    let end_idx = start_idx + duration - 1;
    let count = end_idx - start_idx + 1;
    let (start_day, end_day) = (start_idx + 1, end_idx + 1);
    let (first, last) = (weekday(start_idx), weekday(end_idx));

    instance(
        id,
        Params::HolidaySpan { start_day, end_day, count },
        Vec::new(),
        format!("放假啦！从星期{first}放假到星期{last}。一共放了几天假？"),
        format!("放了 {count} 天假"),
        format!("{end_day} - {start_day} + 1 = {count}"),
        "公式：结束序号 - 开始序号 + 1 (头尾都算)",
        [
            format!("第一步：在日历上圈出开始的星期{first}。"),
            format!("第二步：一直圈到星期{last}。"),
            "第三步：头尾都休息了，数一数绿色的格子有几个？".to_string(),
        ],
    )
}

// ---------------------------------------------------------------------------
// Weekday-Delay
// ---------------------------------------------------------------------------

pub fn generate_delay<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let today = rng.uniform_int(0, 6);
    let delay = rng.uniform_int(1, 5);
    Ok(weekday_delay(id, today, delay))
}

pub fn weekday_delay(id: String, today: u32, delay: u32) -> ProblemInstance {
    let target = (today + delay) % 7;
    let (from, to) = (weekday(today), weekday(target));

    instance(
        id,
        Params::WeekdayDelay { today, delay, target },
        Vec::new(),
        format!("今天是星期{from}，再过 {delay} 天是星期几？"),
        format!("是星期{to}"),
        format!("({today} + {delay}) mod 7 = {target}（星期{from} → 星期{to}）"),
        "公式：(今天 + 推迟天数) 循环数一数",
        [
            format!("第一步：找到“今天”是星期{from}。"),
            format!("第二步：顺时针往后数 {delay} 个格子。(跳一跳)"),
            "第三步：停下的位置就是答案啦！".to_string(),
        ],
    )
}
