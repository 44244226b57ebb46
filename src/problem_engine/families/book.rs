use crate::error::ProblemError;
use crate::problem_engine::{
    helpers::instance,
    models::{Params, ProblemInstance},
    random::RandomSource,
};

pub fn generate_book<R: RandomSource>(rng: &mut R, id: String) -> Result<ProblemInstance, ProblemError> {
    let start = rng.uniform_int(1, 10);
    let count = rng.uniform_int(2, 9);
    Ok(book_pages(id, start, count))
}

/// Pages `start..=start+count-1`, both ends read. Expects `count >= 1`.
pub fn book_pages(id: String, start: u32, count: u32) -> ProblemInstance {
    debug_assert!(count >= 1, "a reading span covers at least one page");
    let end = start + count - 1;

    instance(
        id,
        Params::BookPages { start, end, count },
        Vec::new(),
        format!("读书打卡！今天从第 {start} 页看到第 {end} 页。今天一共看了几页书？"),
        format!("一共看了 {count} 页"),
        format!("{end} - {start} + 1 = {count}"),
        "公式：末页 - 起始页 + 1 (头尾都算)",
        [
            format!("第一步：找到开始的第 {start} 页，把它圈出来。"),
            format!("第二步：一直读到第 {end} 页，把它也圈出来。"),
            "第三步：中间的都读了，因为头尾都算了，所以公式是 “末-初+1”。".to_string(),
        ],
    )
}
