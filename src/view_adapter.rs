use serde_json::{json, Value};

use crate::problem_engine::{
    models::ProblemInstance,
    reveal::{scene, FINAL_STEP},
};

/// Formula, concept and answer; only sent once the last step is reached.
fn answer_panel(problem: &ProblemInstance, step: u8) -> Value {
    if step < FINAL_STEP {
        return Value::Null;
    }
    json!({
        "formula": problem.formula_text,
        "concept": problem.concept_text,
        "text":    problem.answer_text,
    })
}

/// Map a problem and its current step to the JSON payload a front end draws from.
///
/// Everything a renderer needs is in here: the family tag selects the diagram,
/// `cells` positions and colours it, `hint` is the step text.
pub fn to_view_json(problem: &ProblemInstance, step: u8) -> Value {
    let view = scene(problem, step);

    json!({
        "id":       problem.id,
        "family":   problem.family,
        "title":    problem.family.to_string(),
        "icon":     problem.family.icon(),
        "question": problem.question,
        "numbers":  problem.numbers(),
        "names":    problem.names,
        "step":     view.step,
        "hint":     view.hint,
        "progress_percent": (view.progress * 100.0).round() as u32,
        "cells":    view.cells,
        "answer":   answer_panel(problem, view.step),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::families::queue;

    #[test]
    fn answer_is_withheld_until_the_last_step() {
        let p = queue::front_back("FB-00000001".to_string(), "小明", 4, 2);
        for step in 0..3 {
            assert!(to_view_json(&p, step)["answer"].is_null(), "answer leaked at step {step}");
        }
        let done = to_view_json(&p, 3);
        assert_eq!(done["answer"]["formula"], "4 + 2 + 1 = 7");
        assert_eq!(done["progress_percent"], 100);
    }

    #[test]
    fn payload_carries_tag_numbers_and_hint() {
        let p = queue::front_back("FB-00000001".to_string(), "小明", 4, 2);
        let v = to_view_json(&p, 1);
        assert_eq!(v["family"], "QUEUE_FB");
        assert_eq!(v["numbers"], json!([4, 2, 7]));
        assert_eq!(v["names"], json!(["小明"]));
        assert_eq!(v["hint"], p.steps[1].as_str());
        assert_eq!(v["progress_percent"], 33);
        assert_eq!(v["cells"][4]["role"], "marked");
    }
}
