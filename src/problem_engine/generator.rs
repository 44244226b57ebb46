use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ProblemError;
use crate::problem_engine::{
    families::{book, calendar, queue},
    models::{Family, ProblemInstance},
    random::{source_from_seed, RandomSource},
};

/// One-shot request: a family plus an optional seed for reproducible draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub family: Family,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Entropy-seeded request for `family`.
    pub fn new(family: Family) -> Self {
        ProblemRequest { family, rng_seed: None }
    }

    pub fn seeded(family: Family, seed: u64) -> Self {
        ProblemRequest { family, rng_seed: Some(seed) }
    }
}

/// Unique instance id from family prefix + one random word.
fn make_instance_id<R: RandomSource>(family: Family, rng: &mut R) -> String {
    format!("{}-{:08X}", family.id_prefix(), rng.uniform_int(0, u32::MAX))
}

/// Core dispatch: draws an id, then routes to the family generator.
pub fn generate<R: RandomSource>(family: Family, rng: &mut R) -> Result<ProblemInstance, ProblemError> {
    let id = make_instance_id(family, rng);

    let problem = match family {
        Family::IntervalCount    => queue::generate_interval(rng, id)?,
        Family::QueueFrontBack   => queue::generate_front_back(rng, id)?,
        Family::QueueRankOverlap => queue::generate_rank_overlap(rng, id)?,
        Family::QueueMixed       => queue::generate_mixed(rng, id)?,
        Family::BookPages        => book::generate_book(rng, id)?,
        Family::HolidaySpan      => calendar::generate_holiday(rng, id)?,
        Family::WeekdayDelay     => calendar::generate_delay(rng, id)?,
    };

    debug!(family = family.tag(), id = %problem.id, numbers = ?problem.numbers(), "generated problem");
    Ok(problem)
}

/// Dispatch on a wire tag. Anything outside the seven known tags is an error.
pub fn generate_by_tag<R: RandomSource>(tag: &str, rng: &mut R) -> Result<ProblemInstance, ProblemError> {
    let family: Family = tag.parse().map_err(|err| {
        warn!(tag, "refusing to generate for unknown family");
        err
    })?;
    generate(family, rng)
}

/// Convenience entry point mirroring a request/response API.
pub fn generate_problem(request: ProblemRequest) -> Result<ProblemInstance, ProblemError> {
    let mut rng = source_from_seed(request.rng_seed);
    generate(request.family, &mut rng)
}
