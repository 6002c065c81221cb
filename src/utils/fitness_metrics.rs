use crate::tree::expr::{Bindings, Expr};

/// Sum of absolute errors of `tree` over the whole training case set.
/// Lower is better; exactly 0 means the tree reproduces every label.
pub fn fitness_regression(cases: &[(Bindings, f32)], tree: &Expr) -> f32 {
    let mut fitness: f32 = 0.;
    cases
        .iter()
        .for_each(|(bindings, label)| fitness += (tree.evaluate(bindings) - label).abs());

    return fitness;
}
