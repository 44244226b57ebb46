//! Walks every problem family through a full reveal.
//!
//! Run with: `cargo run --example demo`
//!
//! Set `LOG_LEVEL=debug` to watch generation and session transitions.
//! Set `DEMO_JSON=1` to also print the front-end payload at each step.

use tracing_subscriber::EnvFilter;
use word_problem_gen::{to_view_json, Family, ProblemError, Role, Session, SessionConfig};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

fn role_glyph(role: Role) -> char {
    match role {
        Role::Idle    => '·',
        Role::Marked  => '★',
        Role::First   => 'A',
        Role::Second  => 'B',
        Role::Overlap => '⊕',
        Role::Result  => '✓',
    }
}

fn print_step(session: &Session, show_json: bool) {
    let (Some(problem), Some(view)) = (session.current(), session.view()) else {
        return;
    };
    let strip: String = view
        .cells
        .iter()
        .map(|c| if c.visible { role_glyph(c.role) } else { ' ' })
        .collect();
    println!(
        "  [{}] {:>3}%  |{strip}|  shown {:>2}, counted {:>2}  {}",
        view.step,
        (view.progress * 100.0).round(),
        view.visible_count(),
        view.count_role(Role::Result),
        view.hint,
    );
    if view.show_answer {
        println!("        {}  →  {}  ({})", problem.formula_text, problem.answer_text, problem.concept_text);
    }
    if show_json {
        println!("{}", to_view_json(problem, view.step));
    }
}

fn main() -> Result<(), ProblemError> {
    init_tracing();
    let show_json = std::env::var("DEMO_JSON").is_ok();

    let mut session = Session::with_config(
        Family::IntervalCount,
        SessionConfig { rng_seed: Some(2024), ..SessionConfig::default() },
    )?;
    let delay = session.config().reset_delay();

    for family in Family::ALL {
        session.select_family(family)?;
        // Let the transition delay run out so the new problem lands.
        session.elapse(delay);

        let Some(problem) = session.current() else {
            continue;
        };
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("{} {}  [{}]  {}", family.icon(), family, family.tag(), problem.id);
        println!("  Q: {}", problem.question);

        print_step(&session, show_json);
        while session.step() < 3 {
            session.advance()?;
            print_step(&session, show_json);
        }
    }

    // One more advance at the final step swaps in a new problem.
    session.advance()?;
    session.elapse(delay);
    if let Some(next) = session.current() {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Next problem (step {}): {}", session.step(), next.question);
    }
    Ok(())
}
