use crate::tree::expr::{Bindings, Expr};
use crate::utils::utility_funcs::float_loop;

// Target: f(x) = x^4 + x^3 + x^2 + x
fn make_label(x: f32) -> f32 {
    x * x * x * x + x * x * x + x * x + x
}

pub fn get_cases() -> Vec<(Bindings, f32)> {
    let mut cases = vec![];

    for x in float_loop(-1., 1.05, 0.1) {
        let mut bindings = Bindings::default();
        bindings.insert("x".to_string(), x);

        cases.push((bindings, make_label(x)));
    }

    return cases;
}

pub fn terminal_set() -> Vec<Expr> {
    let mut terminals = vec![Expr::Variable("x".to_string())];
    for c in 1..=5 {
        terminals.push(Expr::Constant(c as f32));
    }

    return terminals;
}
