use rand::Rng;
use crate::tree::expr::{BinaryOpKind, Expr};
use crate::tree::generator;

/// Subtree mutation: a uniformly random node of `tree` (the root included)
/// is cut and a freshly grown subtree takes its place. The input tree is
/// left untouched.
pub fn subtree_mutation<R: Rng>(
    rng: &mut R,
    tree: &Expr,
    functions: &[BinaryOpKind],
    terminals: &[Expr],
    max_depth: usize,
) -> Expr {
    let position = rng.gen_range(0..tree.size());
    let replacement = generator::grow(rng, max_depth, functions, terminals);
    tree.replace(position, &replacement)
}
