use rand::prelude::SliceRandom;
use rand::Rng;
use crate::tree::expr::Expr;

/// Probability of picking the crossover point among operator nodes
/// rather than terminals (when the tree has operator nodes at all).
const OPERATOR_BIAS: f32 = 0.9;

/// Pick a preorder position in `tree`, biased towards internal nodes.
///
/// A tree without operator nodes degrades to a terminal-only pick, which
/// for a bare leaf means the root itself.
fn biased_position<R: Rng>(rng: &mut R, tree: &Expr) -> usize {
    let operator_positions = tree.operator_positions();
    if !operator_positions.is_empty() && rng.gen::<f32>() < OPERATOR_BIAS {
        return *operator_positions.choose(rng).unwrap();
    }
    *tree.terminal_positions().choose(rng).unwrap()
}

/// Subtree crossover: a donor subtree picked from `left` replaces one
/// specific subtree occurrence inside `right`. Both parents are left
/// untouched; the offspring is a fresh tree.
pub fn subtree_crossover<R: Rng>(rng: &mut R, left: &Expr, right: &Expr) -> Expr {
    let donor = left.subtree(biased_position(rng, left));
    let target = biased_position(rng, right);
    right.replace(target, donor)
}
