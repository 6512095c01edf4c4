//! Generation loop execution.
//!
//! [`EvoRunner`] orchestrates the complete run:
//! founders → {evaluate → report → breed} × `num_generations`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::breeder::breed;
use crate::colony::evaluate_colonies;
use crate::config::EvoConfig;
use crate::types::{ColonyEvaluator, GenerationSink, Individual};

/// Result of a completed run.
///
/// The engine does not hand back a population: the last breed step's output
/// is intentionally dropped unevaluated, matching the run's documented
/// terminal behavior. What remains is the per-generation record.
#[derive(Debug, Clone)]
pub struct EvoResult {
    /// Number of generations evaluated and reported.
    pub generations: usize,

    /// Best fitness observed in each evaluated generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the generation loop.
///
/// # Usage
///
/// ```
/// use colony_evo::{ColonyEvaluator, EvoConfig, EvoRunner, Individual, WriterSink};
///
/// struct SumEvaluator;
/// impl ColonyEvaluator for SumEvaluator {
///     fn evaluate(&self, colony: &mut [Individual]) {
///         for ind in colony {
///             ind.fitness = ind.genome.iter().sum();
///         }
///     }
/// }
///
/// let config = EvoConfig::default()
///     .with_colonies(2, 5)
///     .with_num_genes(4)
///     .with_num_generations(3)
///     .with_seed(42);
/// let mut sink = WriterSink::new(Vec::new());
/// let result = EvoRunner::run(&SumEvaluator, &mut sink, &config);
/// assert_eq!(result.generations, 3);
/// ```
pub struct EvoRunner;

impl EvoRunner {
    /// Runs the configured number of generations.
    ///
    /// Each cycle evaluates all colonies (blocking until every one has
    /// finished), reports the evaluated population to `sink`, then breeds
    /// the next population. The final bred population is discarded.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`EvoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<E: ColonyEvaluator, S: GenerationSink>(
        evaluator: &E,
        sink: &mut S,
        config: &EvoConfig,
    ) -> EvoResult {
        config.validate().expect("invalid EvoConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = first_generation(config, &mut rng);
        let mut fitness_history = Vec::with_capacity(config.num_generations);

        for generation in 0..config.num_generations {
            evaluate_colonies(
                evaluator,
                &mut population,
                config.individuals_per_colony,
                config.parallel,
            );

            sink.report(&population, generation);
            fitness_history.push(best_fitness(&population));

            population = breed(population, config, &mut rng);
        }

        EvoResult {
            generations: config.num_generations,
            fitness_history,
        }
    }
}

/// Creates the founder population: random ids, zero ancestry, uniform
/// random genomes.
fn first_generation<R: Rng>(config: &EvoConfig, rng: &mut R) -> Vec<Individual> {
    (0..config.population_size())
        .map(|_| Individual::founder(config.num_genes, rng))
        .collect()
}

fn best_fitness(population: &[Individual]) -> f64 {
    population.iter().map(|ind| ind.fitness).fold(f64::MIN, f64::max)
}
