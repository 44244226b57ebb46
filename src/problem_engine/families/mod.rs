//! Family generators, grouped by theme.
//!
//! Every module exposes a drawing function and a pure builder:
//!
//! ```ignore
//! pub fn generate_<name><R: RandomSource>(rng: &mut R, id: String)
//!     -> Result<ProblemInstance, ProblemError>;
//! pub fn <name>(id: String, /* explicit parameters */) -> ProblemInstance;
//! ```
//!
//! The drawing function only picks numbers and names; the builder does the
//! arithmetic and the wording, so tests can force exact values through it.
//! `generator.rs` dispatches to the drawing functions.

/// Interval-Count, Queue-Front-Back, Queue-Rank-Overlap, Queue-Mixed-Rank-Count
pub mod queue;
/// Book-Pages
pub mod book;
/// Holiday-Span, Weekday-Delay
pub mod calendar;
