pub mod koza_1;
pub mod quadratic;
