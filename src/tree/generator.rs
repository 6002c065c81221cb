use rand::prelude::SliceRandom;
use rand::Rng;
use crate::tree::expr::{BinaryOpKind, Expr};

fn random_terminal<R: Rng>(rng: &mut R, terminals: &[Expr]) -> Expr {
    terminals
        .choose(rng)
        .expect("terminal set must not be empty")
        .clone()
}

fn random_function<R: Rng>(rng: &mut R, functions: &[BinaryOpKind]) -> BinaryOpKind {
    *functions
        .choose(rng)
        .expect("function set must not be empty")
}

/// Build a tree with every leaf at exactly `depth` levels below the root.
pub fn full<R: Rng>(rng: &mut R, depth: usize, functions: &[BinaryOpKind], terminals: &[Expr]) -> Expr {
    if depth == 0 {
        return random_terminal(rng, terminals);
    }
    let op = random_function(rng, functions);
    let left = full(rng, depth - 1, functions, terminals);
    let right = full(rng, depth - 1, functions, terminals);
    Expr::BinaryOp(op, Box::new(left), Box::new(right))
}

/// Build a tree of irregular shape with leaves at depth <= `depth`.
///
/// At each level above the bottom the branch stops early with a terminal
/// with probability |terminals| / (|terminals| + |functions|).
pub fn grow<R: Rng>(rng: &mut R, depth: usize, functions: &[BinaryOpKind], terminals: &[Expr]) -> Expr {
    if depth == 0 {
        return random_terminal(rng, terminals);
    }
    if rng.gen_range(0..functions.len() + terminals.len()) < terminals.len() {
        return random_terminal(rng, terminals);
    }
    let op = random_function(rng, functions);
    let left = grow(rng, depth - 1, functions, terminals);
    let right = grow(rng, depth - 1, functions, terminals);
    Expr::BinaryOp(op, Box::new(left), Box::new(right))
}

/// Ramped half-and-half initialisation: exactly `count` pairwise distinct
/// trees, alternating `full` (even success index) and `grow` (odd), while
/// the depth cursor cycles 1..=max_depth.
///
/// A duplicate is discarded without counting towards `count`, but the depth
/// cursor still advances. Under exhaustion of a depth level the population
/// therefore saturates at the shapes that are still free instead of
/// spinning on one depth forever.
pub fn ramp_half_half<R: Rng>(
    rng: &mut R,
    count: usize,
    max_depth: usize,
    functions: &[BinaryOpKind],
    terminals: &[Expr],
) -> Vec<Expr> {
    assert!(max_depth >= 1, "ramped half-and-half needs max_depth >= 1");

    let mut population: Vec<Expr> = Vec::with_capacity(count);
    let mut depth = 1;

    while population.len() < count {
        let candidate = if population.len() % 2 == 0 {
            full(rng, depth, functions, terminals)
        } else {
            grow(rng, depth, functions, terminals)
        };

        depth += 1;
        if depth > max_depth {
            depth = 1;
        }

        if !population.contains(&candidate) {
            population.push(candidate);
        }
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::expr::FUNCTION_SET;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn terminals() -> Vec<Expr> {
        vec![
            Expr::Variable("x".to_string()),
            Expr::Constant(1.),
            Expr::Constant(2.),
            Expr::Constant(3.),
        ]
    }

    fn min_leaf_depth(expr: &Expr) -> usize {
        match expr {
            Expr::BinaryOp(_, left, right) => {
                1 + min_leaf_depth(left).min(min_leaf_depth(right))
            }
            _ => 0,
        }
    }

    #[test]
    fn full_puts_every_leaf_at_exact_depth() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let terminals = terminals();
        for depth in 0..5 {
            for _ in 0..20 {
                let tree = full(&mut rng, depth, &FUNCTION_SET, &terminals);
                assert_eq!(tree.depth(), depth);
                assert_eq!(min_leaf_depth(&tree), depth);
            }
        }
    }

    #[test]
    fn grow_never_exceeds_depth_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let terminals = terminals();
        for depth in 0..6 {
            for _ in 0..50 {
                let tree = grow(&mut rng, depth, &FUNCTION_SET, &terminals);
                assert!(tree.depth() <= depth);
            }
        }
    }

    #[test]
    fn ramp_half_half_yields_distinct_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let terminals = terminals();
        let population = ramp_half_half(&mut rng, 50, 4, &FUNCTION_SET, &terminals);

        assert_eq!(population.len(), 50);
        for (i, a) in population.iter().enumerate() {
            for b in &population[i + 1..] {
                assert_ne!(a, b);
            }
        }
        // The depth ramp never exceeds its bound.
        assert!(population.iter().all(|tree| tree.depth() <= 4));
    }
}
