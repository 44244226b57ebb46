//! Queue problems: counting the people between two ranks, and recovering a
//! queue's length from counts and ranks around one named child.

use crate::error::ProblemError;
use crate::problem_engine::{
    helpers::{draw_names, instance},
    models::{MixedQueue, Params, ProblemInstance},
    random::RandomSource,
};

// ---------------------------------------------------------------------------
// Interval-Count: people strictly between rank a and rank b
// ---------------------------------------------------------------------------

pub fn generate_interval<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let names = draw_names(rng, 2)?;
    let a = rng.uniform_int(1, 5);
    let gap = rng.uniform_int(2, 6);
    Ok(interval(id, &names[0], &names[1], a, gap))
}

/// `b = a + gap + 1`, so exactly `gap` people stand between the two.
pub fn interval(id: String, first: &str, second: &str, a: u32, gap: u32) -> ProblemInstance {
    let b = a + gap + 1;
    let between = b - a - 1;

    instance(
        id,
        Params::IntervalCount { a, b, between },
        vec![first.to_string(), second.to_string()],
        format!("排队啦！{first}排在第 {a} 个，{second}排在第 {b} 个。请问{first}和{second}之间有几个人？"),
        format!("之间有 {between} 个人"),
        format!("{b} - {a} - 1 = {between}"),
        "公式：大数 - 小数 - 1",
        [
            format!("第一步：画出排队的队伍。找到第 {a} 个和第 {b} 个。"),
            "第二步：我们要找的是他们“中间”的人 (不包括头尾)。".to_string(),
            "第三步：数一数，或者用减法算一算！".to_string(),
        ],
    )
}

// ---------------------------------------------------------------------------
// Queue-Front-Back: front count + back count + the child
// ---------------------------------------------------------------------------

pub fn generate_front_back<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let names = draw_names(rng, 1)?;
    let front = rng.uniform_int(1, 6);
    let back = rng.uniform_int(1, 6);
    Ok(front_back(id, &names[0], front, back))
}

pub fn front_back(id: String, name: &str, front: u32, back: u32) -> ProblemInstance {
    let total = front + back + 1;

    instance(
        id,
        Params::QueueFrontBack { front, back, total },
        vec![name.to_string()],
        format!("{name}在排队，{name}前面有 {front} 人，后面有 {back} 人。这队一共有多少人？"),
        format!("一共有 {total} 人"),
        format!("{front} + {back} + 1 = {total}"),
        "公式：前面人数 + 后面人数 + 1 (自己)",
        [
            format!("第一步：先看看{name}在哪里。(那个不同颜色的小人)"),
            format!("第二步：加上前面的 {front} 个人。"),
            format!("第三步：再加上后面的 {back} 个人。别忘了{name}自己哦！"),
        ],
    )
}

// ---------------------------------------------------------------------------
// Queue-Rank-Overlap: rank from the front + rank from the back - 1
// ---------------------------------------------------------------------------

pub fn generate_rank_overlap<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let names = draw_names(rng, 1)?;
    let front_rank = rng.uniform_int(3, 7);
    let back_rank = rng.uniform_int(3, 7);
    Ok(rank_overlap(id, &names[0], front_rank, back_rank))
}

/// Ranks are 1-based; both must be at least 1.
pub fn rank_overlap(id: String, name: &str, front_rank: u32, back_rank: u32) -> ProblemInstance {
    debug_assert!(front_rank >= 1 && back_rank >= 1, "ranks start at 1");
    let total = front_rank + back_rank - 1;

    instance(
        id,
        Params::QueueRankOverlap { front_rank, back_rank, total },
        vec![name.to_string()],
        format!("做操啦！从前往后数，{name}是第 {front_rank} 个；从后往前数，{name}是第 {back_rank} 个。这队有多少人？"),
        format!("一共有 {total} 人"),
        format!("{front_rank} + {back_rank} - 1 = {total}"),
        "公式：从前数 + 从后数 - 1 (减去重复)",
        [
            format!("第一步：从前往后数，{name}排第 {front_rank}。(蓝色数字)"),
            format!("第二步：从后往前数，{name}排第 {back_rank}。(黄色数字，注意看！{name}身上有两个数字)"),
            format!("第三步：{name}被数了两次，所以要把重复的一次减掉。"),
        ],
    )
}

// ---------------------------------------------------------------------------
// Queue-Mixed-Rank-Count: one side given as a count, the other as a rank
// ---------------------------------------------------------------------------

pub fn generate_mixed<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let names = draw_names(rng, 1)?;
    let shape = if rng.uniform_int(0, 1) == 0 {
        let front_count = rng.uniform_int(2, 6);
        let back_rank = rng.uniform_int(3, 7);
        MixedQueue::FrontCountBackRank { front_count, back_rank, total: front_count + back_rank }
    } else {
        let front_rank = rng.uniform_int(3, 7);
        let back_count = rng.uniform_int(2, 6);
        MixedQueue::FrontRankBackCount { front_rank, back_count, total: front_rank + back_count }
    };
    Ok(mixed(id, &names[0], shape))
}

/// Builds a mixed-queue instance; `total` inside `shape` is recomputed so a
/// caller cannot smuggle in an inconsistent answer. Ranks are 1-based.
pub fn mixed(id: String, name: &str, shape: MixedQueue) -> ProblemInstance {
    match shape {
        MixedQueue::FrontCountBackRank { front_count, back_rank, .. } => {
            let total = front_count + back_rank;
            instance(
                id,
                Params::QueueMixed(MixedQueue::FrontCountBackRank { front_count, back_rank, total }),
                vec![name.to_string()],
                format!("排队检查身体！{name}的前面有 {front_count} 人，从后往前数{name}是第 {back_rank} 个。这队一共有多少人？"),
                format!("一共有 {total} 人"),
                format!("{front_count} + {back_rank} = {total}"),
                "公式：前面的人数 + 从后数的排名",
                [
                    format!("第一步：先看看{name}的前面，一共有 {front_count} 个人。(蓝色数字)"),
                    format!("第二步：再看后面，从后往前数{name}是第 {back_rank} 个。(黄色数字：1, 2, 3...)"),
                    "第三步：两部分加起来，刚好就是所有人！".to_string(),
                ],
            )
        }
        MixedQueue::FrontRankBackCount { front_rank, back_count, .. } => {
            let total = front_rank + back_count;
            instance(
                id,
                Params::QueueMixed(MixedQueue::FrontRankBackCount { front_rank, back_count, total }),
                vec![name.to_string()],
                format!("排队检查身体！{name}从前往后数排第 {front_rank} 个，{name}的后面还有 {back_count} 人。这队一共有多少人？"),
                format!("一共有 {total} 人"),
                format!("{front_rank} + {back_count} = {total}"),
                "公式：从前数的排名 + 后面的人数",
                [
                    format!("第一步：从前往后数，{name}排在第 {front_rank} 个。(蓝色数字)"),
                    format!("第二步：看看{name}的后面，还有 {back_count} 个人。(黄色数字：1, 2, 3...)"),
                    "第三步：两部分加起来，刚好就是所有人！".to_string(),
                ],
            )
        }
    }
}
