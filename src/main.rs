use clap::Parser;
use float_eq::float_eq;
use gp_tree_regression::datasets::*;
use gp_tree_regression::global_params::GpParameters;
use gp_tree_regression::tree::expr::FUNCTION_SET;
use gp_tree_regression::utils::runner::Runner;

#[derive(Parser, Clone)]
#[clap(author, version, about, name = "gp_tree_regression")]
struct Args {
    // 0 => quadratic (x^2 - x - 2)
    // 1 => koza_1 (x^4 + x^3 + x^2 + x)
    #[arg(long, default_value_t = 0)]
    dataset: usize,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 200)]
    population_size: usize,

    #[arg(long, default_value_t = 5)]
    max_depth: usize,

    #[arg(long, default_value_t = 1000)]
    max_generations: usize,

    #[arg(long, default_value_t = 0.19)]
    elitism_rate: f32,

    #[arg(long, default_value_t = 0.01)]
    mutation_rate: f32,

    #[arg(long, default_value_t = 0.01)]
    fitness_threshold: f32,

    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() {
    // ################################################################################
    // ############################ Arguments #########################################
    // ################################################################################
    let args = Args::parse();

    let (cases, terminals) = match args.dataset {
        0 => (quadratic::get_cases(), quadratic::terminal_set()),
        1 => (koza_1::get_cases(), koza_1::terminal_set()),
        _ => panic!("Wrong dataset"),
    };

    let params = GpParameters {
        population_size: args.population_size,
        max_depth: args.max_depth,
        max_generations: args.max_generations,
        elitism_rate: args.elitism_rate,
        mutation_rate: args.mutation_rate,
        fitness_threshold: args.fitness_threshold,
    };

    let seed = args.seed.unwrap_or_else(rand::random);

    println!("{}", params);
    println!("seed: {}", seed);

    // ################################################################################
    // ############################ Training ##########################################
    // ################################################################################
    let threshold = args.fitness_threshold;
    let mut runner = Runner::new(params, FUNCTION_SET.to_vec(), terminals, cases.clone(), seed);

    if args.verbose {
        while runner.get_best_fitness() >= threshold
            && runner.generation < runner.params.max_generations
        {
            println!("{}", runner);
            runner.learn_step();
        }
    }
    let champion = runner.run(|fitness| fitness < threshold);
    let best_fitness = runner.get_best_fitness();

    // ################################################################################
    // ############################ Result ############################################
    // ################################################################################
    println!("End at generation: {}", runner.generation);
    println!("Champion: {}", champion);
    println!("Fitness: {}", best_fitness);

    if float_eq!(best_fitness, 0., abs <= threshold) {
        println!("Converged below threshold {}", threshold);
    } else {
        println!("Generation budget exhausted before threshold {}", threshold);
    }

    for (bindings, expected) in &cases {
        let predicted = champion.evaluate(bindings);
        println!("expected: {:>12.4}    predicted: {:>12.4}", expected, predicted);
    }
}
