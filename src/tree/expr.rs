use std::fmt::{Display, Formatter};
use rustc_hash::FxHashMap;
use crate::utils::symbolic_regression_functions as function_set;

/// Variable bindings for one training case.
pub type Bindings = FxHashMap<String, f32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

/// The full binary-operator vocabulary.
pub const FUNCTION_SET: [BinaryOpKind; 4] = [
    BinaryOpKind::Add,
    BinaryOpKind::Sub,
    BinaryOpKind::Mul,
    BinaryOpKind::Div,
];

impl BinaryOpKind {
    pub fn apply(&self, lhs: f32, rhs: f32) -> f32 {
        match self {
            BinaryOpKind::Add => function_set::add(lhs, rhs),
            BinaryOpKind::Sub => function_set::subtract(lhs, rhs),
            BinaryOpKind::Mul => function_set::mul(lhs, rhs),
            BinaryOpKind::Div => function_set::div(lhs, rhs),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOpKind::Add => "+",
            BinaryOpKind::Sub => "-",
            BinaryOpKind::Mul => "*",
            BinaryOpKind::Div => "/",
        }
    }
}

/// An immutable arithmetic expression tree.
///
/// Trees compare structurally (`PartialEq`) for population deduplication.
/// For crossover and mutation a node is addressed by its preorder position
/// (root = 0, then left subtree, then right subtree), so one occurrence of
/// a repeated subexpression can be replaced without touching the others.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Constant(f32),
    Variable(String),
    BinaryOp(BinaryOpKind, Box<Expr>, Box<Expr>),
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::BinaryOp(op, left, right) => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
        }
    }
}

impl Expr {
    /// Evaluate the tree against one set of variable bindings.
    ///
    /// Total for every syntactically valid tree: an invalid division
    /// evaluates to the sentinel 1.0 instead of raising. An unbound
    /// variable is a terminal-set/case-set mismatch and aborts the run.
    pub fn evaluate(&self, bindings: &Bindings) -> f32 {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(name) => *bindings
                .get(name)
                .unwrap_or_else(|| panic!("variable '{}' missing from training case bindings", name)),
            Expr::BinaryOp(op, left, right) => {
                op.apply(left.evaluate(bindings), right.evaluate(bindings))
            }
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Expr::BinaryOp(_, left, right) => 1 + left.size() + right.size(),
            _ => 1,
        }
    }

    /// Leaf-only trees have depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Expr::BinaryOp(_, left, right) => 1 + left.depth().max(right.depth()),
            _ => 0,
        }
    }

    /// The subtree rooted at the given preorder position.
    pub fn subtree(&self, position: usize) -> &Expr {
        fn walk<'a>(expr: &'a Expr, remaining: &mut usize) -> Option<&'a Expr> {
            if *remaining == 0 {
                return Some(expr);
            }
            *remaining -= 1;
            if let Expr::BinaryOp(_, left, right) = expr {
                if let Some(hit) = walk(left, remaining) {
                    return Some(hit);
                }
                return walk(right, remaining);
            }
            None
        }

        let mut remaining = position;
        walk(self, &mut remaining)
            .unwrap_or_else(|| panic!("position {} out of range for tree of size {}", position, self.size()))
    }

    /// A new tree with the subtree at `position` swapped for `replacement`.
    pub fn replace(&self, position: usize, replacement: &Expr) -> Expr {
        fn rebuild(expr: &Expr, cursor: &mut usize, target: usize, replacement: &Expr) -> Expr {
            let here = *cursor;
            *cursor += 1;
            if here == target {
                return replacement.clone();
            }
            match expr {
                Expr::BinaryOp(op, left, right) => {
                    let left = rebuild(left, cursor, target, replacement);
                    let right = rebuild(right, cursor, target, replacement);
                    Expr::BinaryOp(*op, Box::new(left), Box::new(right))
                }
                leaf => leaf.clone(),
            }
        }

        assert!(position < self.size(), "replace position out of range");
        let mut cursor = 0;
        rebuild(self, &mut cursor, position, replacement)
    }

    /// Preorder positions of all internal (operator) nodes.
    pub fn operator_positions(&self) -> Vec<usize> {
        self.positions_matching(|expr| matches!(expr, Expr::BinaryOp(..)))
    }

    /// Preorder positions of all leaves.
    pub fn terminal_positions(&self) -> Vec<usize> {
        self.positions_matching(|expr| !matches!(expr, Expr::BinaryOp(..)))
    }

    fn positions_matching(&self, predicate: fn(&Expr) -> bool) -> Vec<usize> {
        fn walk(expr: &Expr, cursor: &mut usize, predicate: fn(&Expr) -> bool, hits: &mut Vec<usize>) {
            if predicate(expr) {
                hits.push(*cursor);
            }
            *cursor += 1;
            if let Expr::BinaryOp(_, left, right) = expr {
                walk(left, cursor, predicate, hits);
                walk(right, cursor, predicate, hits);
            }
        }

        let mut hits = vec![];
        let mut cursor = 0;
        walk(self, &mut cursor, predicate, &mut hits);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    fn var(name: &str) -> Expr {
        Expr::Variable(name.to_string())
    }

    fn op(kind: BinaryOpKind, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp(kind, Box::new(left), Box::new(right))
    }

    // f(x) = x^2 - x - 2
    fn quadratic() -> Expr {
        op(
            BinaryOpKind::Sub,
            op(
                BinaryOpKind::Sub,
                op(BinaryOpKind::Mul, var("x"), var("x")),
                var("x"),
            ),
            Expr::Constant(2.),
        )
    }

    fn bind(x: f32) -> Bindings {
        let mut bindings = Bindings::default();
        bindings.insert("x".to_string(), x);
        bindings
    }

    #[test]
    fn evaluates_hand_computed_polynomial() {
        let tree = quadratic();
        assert_float_eq!(tree.evaluate(&bind(-3.)), 10., abs <= 0.0);
        assert_float_eq!(tree.evaluate(&bind(0.)), -2., abs <= 0.0);
        assert_float_eq!(tree.evaluate(&bind(3.)), 4., abs <= 0.0);
    }

    #[test]
    fn division_by_zero_yields_sentinel() {
        for numerator in [5., -1., 0., 1000.] {
            let tree = op(BinaryOpKind::Div, Expr::Constant(numerator), Expr::Constant(0.));
            assert_float_eq!(tree.evaluate(&Bindings::default()), 1., abs <= 0.0);
        }
    }

    #[test]
    #[should_panic(expected = "missing from training case bindings")]
    fn unbound_variable_aborts() {
        var("y").evaluate(&bind(1.));
    }

    #[test]
    fn size_and_depth() {
        let tree = quadratic();
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Expr::Constant(1.).size(), 1);
        assert_eq!(Expr::Constant(1.).depth(), 0);
    }

    #[test]
    fn preorder_positions_partition_the_tree() {
        let tree = quadratic();
        let ops = tree.operator_positions();
        let terminals = tree.terminal_positions();
        assert_eq!(ops, vec![0, 1, 2]);
        assert_eq!(terminals, vec![3, 4, 5, 6]);
        assert_eq!(ops.len() + terminals.len(), tree.size());
    }

    #[test]
    fn replace_targets_one_occurrence_only() {
        // (x + x): positions 0 = op, 1 = left x, 2 = right x.
        let tree = op(BinaryOpKind::Add, var("x"), var("x"));
        let replaced = tree.replace(2, &Expr::Constant(7.));
        assert_eq!(
            replaced,
            op(BinaryOpKind::Add, var("x"), Expr::Constant(7.))
        );
        // The original is untouched.
        assert_eq!(tree, op(BinaryOpKind::Add, var("x"), var("x")));
    }

    #[test]
    fn subtree_and_replace_agree_on_positions() {
        let tree = quadratic();
        for position in 0..tree.size() {
            let sub = tree.subtree(position).clone();
            assert_eq!(tree.replace(position, &sub), tree);
        }
    }

    #[test]
    fn structural_equality_ignores_provenance() {
        assert_eq!(quadratic(), quadratic());
        assert_ne!(quadratic(), var("x"));
    }
}
