//! Shared builder functions used by every family generator.
//!
//! Each generator draws its numbers, then hands everything to [`instance`] so
//! the family files only contain the arithmetic and the wording.

use crate::error::ProblemError;
use crate::problem_engine::{
    models::{Params, ProblemInstance},
    random::RandomSource,
};

/// The fixed pool of actors narrated in queue problems.
pub const NAMES: [&str; 7] = ["小明", "小红", "小刚", "小丽", "小华", "天天", "乐乐"];

/// Weekday characters, index 0 = Monday.
pub const WEEKDAYS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

/// Idle prompt shown before the first step, identical for every family.
pub const READY_PROMPT: &str = "准备好了吗？点击开始！";

/// Draw `n` distinct names from [`NAMES`].
pub fn draw_names<R: RandomSource>(rng: &mut R, n: usize) -> Result<Vec<String>, ProblemError> {
    let mut picked: Vec<&str> = Vec::with_capacity(n);
    for _ in 0..n {
        let name = *rng.pick_excluding(&NAMES, &picked)?;
        picked.push(name);
    }
    Ok(picked.into_iter().map(String::from).collect())
}

/// Weekday character for a 0-based index; wraps past Sunday.
pub fn weekday(idx: u32) -> &'static str {
    WEEKDAYS[(idx % 7) as usize]
}

/// Assemble the final [`ProblemInstance`]; the last call in every generator.
#[allow(clippy::too_many_arguments)]
pub fn instance(
    id: String,
    params: Params,
    names: Vec<String>,
    question: String,
    answer_text: String,
    formula_text: String,
    concept_text: &str,
    hints: [String; 3],
) -> ProblemInstance {
    let [first, second, third] = hints;
    ProblemInstance {
        id,
        family: params.family(),
        params,
        names,
        question,
        answer_text,
        formula_text,
        concept_text: concept_text.to_string(),
        steps: [READY_PROMPT.to_string(), first, second, third],
    }
}
