//! What a diagram shows for an instance at a given step.
//!
//! The mapping is pure: it reads only the family parameters and the step, so
//! any renderer can reproduce the exact same picture without extra state.
//!
//! | Step | Shared pattern |
//! |------|----------------|
//! | 0    | question only, no cells visible |
//! | 1    | first key subject/quantity marked |
//! | 2    | second key subject/quantity marked, groups coloured |
//! | 3    | final count highlighted, answer panel shown |

use serde::Serialize;

use crate::problem_engine::models::{MixedQueue, Params, ProblemInstance};

/// Last step index; reaching it reveals the answer panel.
pub const FINAL_STEP: u8 = 3;

/// Emphasis of one diagram cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Idle,
    /// The named child, the starting page/day, or "today".
    Marked,
    First,
    Second,
    /// The child counted from both ends of the queue.
    Overlap,
    Result,
}

/// One person, page or weekday in the diagram.
///
/// `label` is the number drawn on the cell: a rank or count for queues, a page
/// number for books, a 1-based day number for weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub label: u32,
    pub visible: bool,
    pub role: Role,
}

impl Cell {
    fn hidden(label: u32) -> Self {
        Cell { label, visible: false, role: Role::Idle }
    }

    fn shown(label: u32, role: Role) -> Self {
        Cell { label, visible: true, role }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene<'a> {
    pub step: u8,
    pub cells: Vec<Cell>,
    pub hint: &'a str,
    pub show_answer: bool,
    pub progress: f32,
}

impl Scene<'_> {
    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visible).count()
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.visible && c.role == role).count()
    }
}

/// Completion fraction for a progress bar: `step / 3`, clamped to `[0, 1]`.
pub fn progress_fraction(step: u8) -> f32 {
    (f32::from(step) / f32::from(FINAL_STEP)).clamp(0.0, 1.0)
}

/// Build the scene for `problem` at `step`. Steps past 3 render as step 3.
///
/// Never panics, even for parameters outside the generator ranges (e.g. an
/// instance deserialized from hand-written JSON).
pub fn scene(problem: &ProblemInstance, step: u8) -> Scene<'_> {
    let step = step.min(FINAL_STEP);
    let cells = match problem.params {
        Params::IntervalCount { a, b, .. } => interval_cells(a, b, step),
        Params::QueueFrontBack { front, back, .. } => front_back_cells(front, back, step),
        Params::QueueRankOverlap { front_rank, total, .. } => rank_cells(front_rank, total, step),
        Params::QueueMixed(shape) => mixed_cells(shape, step),
        Params::BookPages { start, end, .. } => {
            let first = start.saturating_sub(2).max(1);
            span_cells(first..=end + 2, start, end, step)
        }
        Params::HolidaySpan { start_day, end_day, .. } => span_cells(1..=7, start_day, end_day, step),
        Params::WeekdayDelay { today, delay, target } => delay_cells(today, delay, target, step),
    };

    Scene {
        step,
        cells,
        hint: problem.hint(step),
        show_answer: step == FINAL_STEP,
        progress: progress_fraction(step),
    }
}

// ---------------------------------------------------------------------------
// Per-family policies
// ---------------------------------------------------------------------------

fn interval_cells(a: u32, b: u32, step: u8) -> Vec<Cell> {
    (1..=b + 2)
        .map(|n| {
            if step == 0 {
                return Cell::hidden(n);
            }
            let role = if step >= 3 && n > a && n < b {
                Role::Result
            } else if step >= 2 && n == a {
                Role::First
            } else if step >= 2 && n == b {
                Role::Second
            } else {
                Role::Idle
            };
            Cell::shown(n, role)
        })
        .collect()
}

fn front_back_cells(front: u32, back: u32, step: u8) -> Vec<Cell> {
    let me = front;
    (0..front + back + 1)
        .map(|i| {
            let label = i + 1;
            if i == me && step >= 1 {
                Cell::shown(label, Role::Marked)
            } else if i < me && step >= 2 {
                Cell::shown(label, Role::First)
            } else if i > me && step >= 3 {
                Cell::shown(label, Role::Second)
            } else {
                Cell::hidden(label)
            }
        })
        .collect()
}

fn rank_cells(front_rank: u32, total: u32, step: u8) -> Vec<Cell> {
    let me = front_rank.saturating_sub(1);
    (0..total)
        .map(|i| {
            let visible = step >= 2 || (step >= 1 && i <= me);
            if !visible {
                return Cell::hidden(i + 1);
            }
            if i == me && step >= 3 {
                Cell::shown(front_rank, Role::Result)
            } else if i == me && step >= 2 {
                Cell::shown(front_rank, Role::Overlap)
            } else if i > me {
                // Back group counts from the end of the queue.
                Cell::shown(total - i, Role::Second)
            } else {
                Cell::shown(i + 1, Role::First)
            }
        })
        .collect()
}

fn mixed_cells(shape: MixedQueue, step: u8) -> Vec<Cell> {
    let me = shape.actor_index();
    let total = shape.total();
    let in_first = |i: u32| match shape {
        MixedQueue::FrontCountBackRank { .. } => i < me,
        MixedQueue::FrontRankBackCount { .. } => i <= me,
    };

    (0..total)
        .map(|i| {
            if step == 0 {
                return Cell::hidden(i + 1);
            }
            if in_first(i) {
                return Cell::shown(i + 1, Role::First);
            }
            if step >= 2 {
                let label = match shape {
                    MixedQueue::FrontCountBackRank { .. } => total - i,
                    MixedQueue::FrontRankBackCount { .. } => i - me,
                };
                return Cell::shown(label, Role::Second);
            }
            if i == me {
                Cell::shown(i + 1, Role::Marked)
            } else {
                Cell::hidden(i + 1)
            }
        })
        .collect()
}

/// Pages or holiday days: start circled, then the inclusive range, then the count.
fn span_cells(labels: std::ops::RangeInclusive<u32>, start: u32, end: u32, step: u8) -> Vec<Cell> {
    labels
        .map(|n| {
            if step == 0 {
                return Cell::hidden(n);
            }
            let in_range = n >= start && n <= end;
            let role = if step >= 3 && in_range {
                Role::Result
            } else if step >= 2 && n == end {
                Role::Second
            } else if step >= 2 && in_range {
                Role::First
            } else if n == start {
                Role::Marked
            } else {
                Role::Idle
            };
            Cell::shown(n, role)
        })
        .collect()
}

fn delay_cells(today: u32, delay: u32, target: u32, step: u8) -> Vec<Cell> {
    // Cyclic distance forward from today; 1..=delay is the hop path.
    let hops = |idx: u32| (idx + 7 - today % 7) % 7;
    (0..7)
        .map(|idx| {
            let label = idx + 1;
            if step == 0 {
                return Cell::hidden(label);
            }
            let on_path = (1..=delay).contains(&hops(idx));
            let role = if idx == today {
                Role::Marked
            } else if step >= 3 && idx == target {
                Role::Result
            } else if step >= 2 && on_path {
                Role::First
            } else {
                Role::Idle
            };
            Cell::shown(label, role)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::families::{book, calendar, queue};

    fn id() -> String {
        "T-00000000".to_string()
    }

    #[test]
    fn step_zero_shows_no_cells() {
        let problems = [
            queue::interval(id(), "小明", "小红", 2, 3),
            queue::front_back(id(), "小明", 4, 2),
            queue::rank_overlap(id(), "小明", 4, 5),
            queue::mixed(id(), "小明", MixedQueue::FrontRankBackCount { front_rank: 3, back_count: 2, total: 0 }),
            book::book_pages(id(), 5, 4),
            calendar::holiday(id(), 1, 3),
            calendar::weekday_delay(id(), 5, 3),
        ];
        for p in &problems {
            let s = scene(p, 0);
            assert_eq!(s.visible_count(), 0, "{:?} shows cells at step 0", p.family);
            assert!(!s.show_answer);
            assert_eq!(s.hint, p.steps[0]);
        }
    }

    #[test]
    fn interval_highlights_people_between_at_the_end() {
        let p = queue::interval(id(), "小明", "小红", 2, 3);
        assert_eq!(scene(&p, 1).count_role(Role::Idle), 8);
        let s2 = scene(&p, 2);
        assert_eq!(s2.count_role(Role::First), 1);
        assert_eq!(s2.count_role(Role::Second), 1);
        let s3 = scene(&p, 3);
        assert_eq!(s3.count_role(Role::Result), 3);
        assert!(s3.show_answer);
    }

    #[test]
    fn front_back_reveals_self_then_front_then_back() {
        let p = queue::front_back(id(), "小明", 4, 2);
        assert_eq!(scene(&p, 1).visible_count(), 1);
        assert_eq!(scene(&p, 2).visible_count(), 5);
        assert_eq!(scene(&p, 3).visible_count(), 7);
        assert_eq!(scene(&p, 3).count_role(Role::Second), 2);
    }

    #[test]
    fn rank_overlap_counts_back_group_from_the_end() {
        let p = queue::rank_overlap(id(), "小明", 4, 5);
        let s1 = scene(&p, 1);
        assert_eq!(s1.visible_count(), 4);
        let s2 = scene(&p, 2);
        assert_eq!(s2.visible_count(), 8);
        assert_eq!(s2.count_role(Role::Overlap), 1);
        let back: Vec<u32> = s2.cells.iter().filter(|c| c.role == Role::Second).map(|c| c.label).collect();
        assert_eq!(back, vec![4, 3, 2, 1]);
        assert_eq!(scene(&p, 3).count_role(Role::Result), 1);
    }

    #[test]
    fn mixed_back_labels_follow_the_shape() {
        let counted = queue::mixed(
            id(), "小明",
            MixedQueue::FrontRankBackCount { front_rank: 3, back_count: 2, total: 5 },
        );
        let s = scene(&counted, 2);
        let back: Vec<u32> = s.cells.iter().filter(|c| c.role == Role::Second).map(|c| c.label).collect();
        assert_eq!(back, vec![1, 2]);

        let ranked = queue::mixed(
            id(), "小明",
            MixedQueue::FrontCountBackRank { front_count: 2, back_rank: 3, total: 5 },
        );
        let s1 = scene(&ranked, 1);
        assert_eq!(s1.count_role(Role::First), 2);
        assert_eq!(s1.count_role(Role::Marked), 1);
        let back: Vec<u32> = scene(&ranked, 2).cells.iter().filter(|c| c.role == Role::Second).map(|c| c.label).collect();
        assert_eq!(back, vec![3, 2, 1]);
    }

    #[test]
    fn book_range_becomes_result() {
        let p = book::book_pages(id(), 1, 4);
        let s = scene(&p, 3);
        // Pages start at 1 even when start - 2 would underflow.
        assert_eq!(s.cells.first().map(|c| c.label), Some(1));
        assert_eq!(s.count_role(Role::Result), 4);
        assert_eq!(scene(&p, 1).count_role(Role::Marked), 1);
    }

    #[test]
    fn holiday_uses_the_whole_week() {
        let p = calendar::holiday(id(), 0, 4);
        let s = scene(&p, 2);
        assert_eq!(s.cells.len(), 7);
        assert_eq!(s.count_role(Role::First), 3);
        assert_eq!(s.count_role(Role::Second), 1);
    }

    #[test]
    fn delay_hops_wrap_around_the_week() {
        let p = calendar::weekday_delay(id(), 5, 3);
        let s2 = scene(&p, 2);
        assert_eq!(s2.count_role(Role::First), 3);
        let s3 = scene(&p, 3);
        let target = s3.cells.iter().find(|c| c.role == Role::Result).map(|c| c.label);
        assert_eq!(target, Some(2)); // Tuesday, 1-based
        assert_eq!(s3.count_role(Role::Marked), 1);
    }

    #[test]
    fn out_of_range_params_render_without_panicking() {
        // Instances can arrive through serde with values no generator draws.
        let mut p = queue::front_back(id(), "小明", 1, 1);
        let odd = [
            Params::QueueRankOverlap { front_rank: 0, back_rank: 0, total: 0 },
            Params::QueueRankOverlap { front_rank: 0, back_rank: 2, total: 3 },
            Params::QueueMixed(MixedQueue::FrontRankBackCount { front_rank: 0, back_count: 2, total: 2 }),
            Params::QueueMixed(MixedQueue::FrontCountBackRank { front_count: 5, back_rank: 0, total: 1 }),
            Params::BookPages { start: 0, end: 0, count: 0 },
            Params::WeekdayDelay { today: 12, delay: 3, target: 1 },
        ];
        for params in odd {
            p.params = params;
            for step in 0..=4 {
                let s = scene(&p, step);
                assert!(s.step <= FINAL_STEP, "{params:?}");
            }
        }
    }

    #[test]
    fn progress_is_step_over_three() {
        assert_eq!(progress_fraction(0), 0.0);
        assert!((progress_fraction(2) - 2.0 / 3.0).abs() < f32::EPSILON);
        assert_eq!(progress_fraction(3), 1.0);
        assert_eq!(progress_fraction(9), 1.0);
    }
}
