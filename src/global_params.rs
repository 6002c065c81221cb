use std::fmt::{Display, Formatter};

#[derive(Clone)]
pub struct GpParameters {
    pub population_size: usize,
    pub max_depth: usize,
    pub max_generations: usize,
    pub elitism_rate: f32,
    pub mutation_rate: f32,
    pub fitness_threshold: f32,
}

impl Default for GpParameters {
    fn default() -> Self {
        GpParameters {
            population_size: 200,
            max_depth: 5,
            max_generations: 1000,
            elitism_rate: 0.19,
            mutation_rate: 0.01,
            fitness_threshold: 0.01,
        }
    }
}

impl Display for GpParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "############ Parameters ############\n")?;
        write!(f, "population_size: {}\n", self.population_size)?;
        write!(f, "max_depth: {}\n", self.max_depth)?;
        write!(f, "max_generations: {}\n", self.max_generations)?;
        write!(f, "elitism_rate: {}\n", self.elitism_rate)?;
        write!(f, "mutation_rate: {}\n", self.mutation_rate)?;
        write!(f, "fitness_threshold: {}\n", self.fitness_threshold)?;
        write!(f, "#########################\n")
    }
}
