pub mod crossover;
pub mod fitness_metrics;
pub mod mutation;
pub mod runner;
pub mod selection;
pub mod symbolic_regression_functions;
pub mod utility_funcs;
