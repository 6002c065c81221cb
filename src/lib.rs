pub mod datasets;
pub mod global_params;
pub mod tree;
pub mod utils;
