use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;

// ---------------------------------------------------------------------------
// Problem families
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "BETWEEN")]
    IntervalCount,
    #[serde(rename = "QUEUE_FB")]
    QueueFrontBack,
    #[serde(rename = "QUEUE_RANK")]
    QueueRankOverlap,
    #[serde(rename = "QUEUE_MIXED")]
    QueueMixed,
    #[serde(rename = "BOOK")]
    BookPages,
    #[serde(rename = "HOLIDAY")]
    HolidaySpan,
    #[serde(rename = "DELAY")]
    WeekdayDelay,
}

impl Family {
    /// All seven families in tab order.
    pub const ALL: [Family; 7] = [
        Family::IntervalCount,
        Family::QueueFrontBack,
        Family::QueueRankOverlap,
        Family::QueueMixed,
        Family::BookPages,
        Family::HolidaySpan,
        Family::WeekdayDelay,
    ];

    /// Stable wire tag, as used by front ends to name a tab.
    pub fn tag(self) -> &'static str {
        match self {
            Family::IntervalCount    => "BETWEEN",
            Family::QueueFrontBack   => "QUEUE_FB",
            Family::QueueRankOverlap => "QUEUE_RANK",
            Family::QueueMixed       => "QUEUE_MIXED",
            Family::BookPages        => "BOOK",
            Family::HolidaySpan      => "HOLIDAY",
            Family::WeekdayDelay     => "DELAY",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Family::IntervalCount    => "↔️",
            Family::QueueFrontBack   => "🚶",
            Family::QueueRankOverlap => "🔢",
            Family::QueueMixed       => "➕",
            Family::BookPages        => "📖",
            Family::HolidaySpan      => "📅",
            Family::WeekdayDelay     => "⏰",
        }
    }

    /// Two-letter prefix for instance ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Family::IntervalCount    => "IC",
            Family::QueueFrontBack   => "FB",
            Family::QueueRankOverlap => "RK",
            Family::QueueMixed       => "MX",
            Family::BookPages        => "BK",
            Family::HolidaySpan      => "HD",
            Family::WeekdayDelay     => "WD",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::IntervalCount    => "之间有几个？",
            Family::QueueFrontBack   => "排队：前后求总数",
            Family::QueueRankOverlap => "排队：第几求总数",
            Family::QueueMixed       => "排队：排名+数量",
            Family::BookPages        => "看书页数",
            Family::HolidaySpan      => "放假天数",
            Family::WeekdayDelay     => "推迟几天？",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Family {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|f| f.tag() == s)
            .ok_or_else(|| ProblemError::UnknownFamily(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Per-family parameters
// ---------------------------------------------------------------------------

/// The two shapes of a mixed rank + count queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedQueue {
    /// `front_count` people stand ahead; the actor is `back_rank`-th from the back.
    FrontCountBackRank { front_count: u32, back_rank: u32, total: u32 },
    /// The actor is `front_rank`-th from the front; `back_count` people stand behind.
    FrontRankBackCount { front_rank: u32, back_count: u32, total: u32 },
}

impl MixedQueue {
    pub fn total(self) -> u32 {
        match self {
            MixedQueue::FrontCountBackRank { total, .. } => total,
            MixedQueue::FrontRankBackCount { total, .. } => total,
        }
    }

    /// 0 for front-count/back-rank, 1 for front-rank/back-count.
    pub fn mode(self) -> u8 {
        match self {
            MixedQueue::FrontCountBackRank { .. } => 0,
            MixedQueue::FrontRankBackCount { .. } => 1,
        }
    }

    /// Zero-based queue position of the actor.
    pub fn actor_index(self) -> u32 {
        match self {
            MixedQueue::FrontCountBackRank { front_count, .. } => front_count,
            MixedQueue::FrontRankBackCount { front_rank, .. } => front_rank.saturating_sub(1),
        }
    }
}

/// Drawn parameters plus the derived answer, one shape per family.
///
/// Weekday indices are 0-based (0 = Monday) except for `HolidaySpan`, whose
/// `start_day`/`end_day` are the 1-based day numbers shown to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Params {
    IntervalCount { a: u32, b: u32, between: u32 },
    QueueFrontBack { front: u32, back: u32, total: u32 },
    QueueRankOverlap { front_rank: u32, back_rank: u32, total: u32 },
    QueueMixed(MixedQueue),
    BookPages { start: u32, end: u32, count: u32 },
    HolidaySpan { start_day: u32, end_day: u32, count: u32 },
    WeekdayDelay { today: u32, delay: u32, target: u32 },
}

impl Params {
    pub fn family(&self) -> Family {
        match self {
            Params::IntervalCount { .. }    => Family::IntervalCount,
            Params::QueueFrontBack { .. }   => Family::QueueFrontBack,
            Params::QueueRankOverlap { .. } => Family::QueueRankOverlap,
            Params::QueueMixed(_)           => Family::QueueMixed,
            Params::BookPages { .. }        => Family::BookPages,
            Params::HolidaySpan { .. }      => Family::HolidaySpan,
            Params::WeekdayDelay { .. }     => Family::WeekdayDelay,
        }
    }

    /// Positional view: the two key parameters followed by the answer.
    pub fn numbers(&self) -> [u32; 3] {
        match *self {
            Params::IntervalCount { a, b, between } => [a, b, between],
            Params::QueueFrontBack { front, back, total } => [front, back, total],
            Params::QueueRankOverlap { front_rank, back_rank, total } => [front_rank, back_rank, total],
            Params::QueueMixed(MixedQueue::FrontCountBackRank { front_count, back_rank, total }) => {
                [front_count, back_rank, total]
            }
            Params::QueueMixed(MixedQueue::FrontRankBackCount { front_rank, back_count, total }) => {
                [front_rank, back_count, total]
            }
            Params::BookPages { start, end, count } => [start, end, count],
            Params::HolidaySpan { start_day, end_day, count } => [start_day, end_day, count],
            Params::WeekdayDelay { today, delay, target } => [today, delay, target],
        }
    }

    /// The derived value the question asks for.
    pub fn answer(&self) -> u32 {
        self.numbers()[2]
    }
}

// ---------------------------------------------------------------------------
// Generated instance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemInstance {
    /// `"<prefix>-<8 hex>"`; distinguishes one draw from the next.
    pub id: String,
    pub family: Family,
    pub params: Params,
    pub names: Vec<String>,
    pub question: String,
    pub answer_text: String,
    pub formula_text: String,
    pub concept_text: String,
    /// Slot 0 is the idle prompt; slots 1..=3 are revealed one per step.
    pub steps: [String; 4],
}

impl ProblemInstance {
    pub fn numbers(&self) -> [u32; 3] {
        self.params.numbers()
    }

    /// Mixed-queue shape flag; `None` for every other family.
    pub fn mode(&self) -> Option<u8> {
        match self.params {
            Params::QueueMixed(mixed) => Some(mixed.mode()),
            _ => None,
        }
    }

    /// Hint text for `step`, clamped to the last slot.
    pub fn hint(&self, step: u8) -> &str {
        &self.steps[usize::from(step.min(3))]
    }
}
