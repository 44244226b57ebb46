//! Core engine — problem generation and the stepwise reveal model.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: families, per-family parameters, the generated instance |
//! | `random`    | The injected randomness capability and seeding |
//! | `helpers`   | Name/weekday pools and the instance builder shared by all families |
//! | `families`  | Seven family generators grouped by theme (queue, book, calendar) |
//! | `generator` | Dispatch: `generate()` by family, by wire tag, or by request |
//! | `reveal`    | Pure `(instance, step) -> Scene` visibility policy |
//! | `session`   | Step counter and the session controller with delayed resets |

pub mod families;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod random;
pub mod reveal;
pub mod session;

pub use generator::{generate, generate_by_tag, generate_problem, ProblemRequest};
pub use models::{Family, MixedQueue, Params, ProblemInstance};
pub use random::{source_from_seed, RandomSource};
pub use reveal::{scene, Cell, Role, Scene};
pub use session::{Advance, RevealState, Session};
