//! # word_problem_gen
//!
//! Generates first-grade arithmetic word problems (queue counting, page
//! counting, weekday arithmetic) and drives their step-by-step explanation.
//!
//! ## How it works
//!
//! 1. Pick a [`Family`] — one of seven fixed problem archetypes.
//! 2. Call [`generate`] with any [`RandomSource`] (every `rand::Rng` is one),
//!    or [`generate_problem`] with a [`ProblemRequest`] carrying an optional
//!    seed. The result is an immutable [`ProblemInstance`]: question, typed
//!    parameters, answer, formula, concept line and exactly four hint slots.
//! 3. A [`Session`] holds the active problem and a step counter `0..=3`.
//!    `advance()` reveals one more hint; advancing past step 3 swaps in a
//!    brand-new problem.
//! 4. [`scene`] turns `(problem, step)` into the cells a diagram should show,
//!    and [`to_view_json`] packages all of it for a front end.
//!
//! ## Quick start
//!
//! ```rust
//! use word_problem_gen::{generate_problem, Family, ProblemRequest, Session, SessionConfig};
//!
//! let problem = generate_problem(ProblemRequest::seeded(Family::QueueFrontBack, 7)).unwrap();
//! println!("{}", problem.question);
//! assert_eq!(problem.steps.len(), 4);
//!
//! let mut session = Session::with_config(Family::WeekdayDelay, SessionConfig::immediate()).unwrap();
//! while session.step() < 3 {
//!     session.advance().unwrap();
//! }
//! let view = session.view().unwrap();
//! assert!(view.show_answer);
//! ```

pub mod config;
pub mod error;
pub mod problem_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `word_problem_gen::generate`
// directly without reaching into `problem_engine::`.
pub use config::SessionConfig;
pub use error::ProblemError;
pub use problem_engine::{
    generate, generate_by_tag, generate_problem, scene, source_from_seed, Advance, Cell, Family,
    MixedQueue, Params, ProblemInstance, ProblemRequest, RandomSource, RevealState, Role, Scene,
    Session,
};
pub use view_adapter::to_view_json;
