use std::fmt::{Display, Formatter};
use itertools::Itertools;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use crate::global_params::GpParameters as g_params;
use crate::tree::expr::{Bindings, BinaryOpKind, Expr};
use crate::tree::generator;
use crate::utils::crossover::subtree_crossover;
use crate::utils::fitness_metrics;
use crate::utils::mutation::subtree_mutation;
use crate::utils::selection;
use crate::utils::utility_funcs::{get_argmin, get_min};

/// The evolution controller. Owns the population and the seeded rng and
/// replaces the whole population once per generation: elite replicas first,
/// then mutants, then crossover offspring. Fitness is recomputed for every
/// individual of every generation.
pub struct Runner {
    pub params: g_params,
    functions: Vec<BinaryOpKind>,
    terminals: Vec<Expr>,
    cases: Vec<(Bindings, f32)>,
    pub population: Vec<Expr>,
    pub fitness_vals: Vec<f32>,
    pub generation: usize,
    pub rng: ChaCha8Rng,
}

impl Display for Runner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Generation: {}, Fitness: {:?}",
            self.generation,
            self.get_best_fitness()
        )
    }
}

impl Runner {
    pub fn new(
        params: g_params,
        functions: Vec<BinaryOpKind>,
        terminals: Vec<Expr>,
        cases: Vec<(Bindings, f32)>,
        seed: u64,
    ) -> Self {
        assert!(params.population_size > 0);
        assert!(!cases.is_empty(), "training case set must not be empty");
        assert!(
            params.elitism_rate + params.mutation_rate <= 1.,
            "elite and mutant quotas exceed the population"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let population = generator::ramp_half_half(
            &mut rng,
            params.population_size,
            params.max_depth,
            &functions,
            &terminals,
        );

        let mut runner = Self {
            params,
            functions,
            terminals,
            cases,
            population,
            fitness_vals: vec![],
            generation: 0,
            rng,
        };
        runner.eval_population();
        runner
    }

    /// Drive generations until the success criterion holds for the best
    /// fitness or the generation budget is exhausted, then hand back the
    /// champion of the final generation.
    pub fn run<F>(&mut self, criteria: F) -> Expr
    where
        F: Fn(f32) -> bool,
    {
        loop {
            if criteria(self.get_best_fitness()) || self.generation == self.params.max_generations {
                return self.get_champion();
            }
            self.learn_step();
        }
    }

    /// Advance by exactly one generation.
    pub fn learn_step(&mut self) {
        let pop_size = self.params.population_size;
        let nbr_elitists = ((pop_size as f32 * self.params.elitism_rate).round() as usize)
            .max(1)
            .min(pop_size);
        let nbr_mutants =
            ((pop_size as f32 * self.params.mutation_rate).round() as usize).min(pop_size - nbr_elitists);
        let nbr_offspring = pop_size - nbr_elitists - nbr_mutants;

        let mut next_population: Vec<Expr> = Vec::with_capacity(pop_size);

        // Elite replicas, best fitness first.
        for id in self.sorted_ids().into_iter().take(nbr_elitists) {
            next_population.push(self.population[id].clone());
        }

        // Mutants from uniformly drawn individuals.
        for _ in 0..nbr_mutants {
            let id = self.rng.gen_range(0..pop_size);
            let mutant = subtree_mutation(
                &mut self.rng,
                &self.population[id],
                &self.functions,
                &self.terminals,
                self.params.max_depth,
            );
            next_population.push(mutant);
        }

        // Crossover offspring; each parent won a size-2 tournament.
        for _ in 0..nbr_offspring {
            let left_id = self.tournament_pick();
            let right_id = self.tournament_pick();
            let child = subtree_crossover(
                &mut self.rng,
                &self.population[left_id],
                &self.population[right_id],
            );
            next_population.push(child);
        }

        self.population = next_population;
        self.generation += 1;
        self.eval_population();
    }

    fn eval_population(&mut self) {
        self.fitness_vals = self
            .population
            .iter()
            .map(|tree| {
                let fitness = fitness_metrics::fitness_regression(&self.cases, tree);
                if fitness.is_nan() || fitness.is_infinite() {
                    f32::MAX
                } else {
                    fitness
                }
            })
            .collect();
    }

    /// Population ids ordered by fitness, best first.
    fn sorted_ids(&self) -> Vec<usize> {
        (0..self.population.len())
            .sorted_by(|a, b| self.fitness_vals[*a].total_cmp(&self.fitness_vals[*b]))
            .collect()
    }

    fn tournament_pick(&mut self) -> usize {
        let first = self.rng.gen_range(0..self.population.len());
        let second = self.rng.gen_range(0..self.population.len());
        selection::tournament(&self.fitness_vals, first, second)
    }

    pub fn get_best_fitness(&self) -> f32 {
        get_min(&self.fitness_vals)
    }

    /// The fitness-minimal tree of the current generation.
    pub fn get_champion(&self) -> Expr {
        let id = get_argmin(&self.fitness_vals);
        return self.population[id].clone();
    }
}
