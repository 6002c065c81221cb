pub mod expr;
pub mod generator;
