//! Core types for the evolution engine.
//!
//! Defines the [`Individual`] model, the [`ColonyEvaluator`] plug-in trait
//! that supplies domain-specific fitness, and the [`GenerationSink`]
//! reporting trait with its stdout/writer implementations.

use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use rand::Rng;

/// One candidate solution in the population.
///
/// Fitness is **maximized** (higher is better). A freshly created or freshly
/// bred individual carries `fitness == 0.0`, meaning "not yet evaluated" —
/// an evaluator that forgets to fill it leaves the individual sorting last,
/// it does not crash the run.
///
/// Identity is cosmetic: `id` is drawn randomly and reassigned on every
/// replication, so it is not unique by construction. Ancestry tracking uses
/// `parent_ids`, with `[0, 0]` marking a founder (no ancestry).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Random identity, not enforced unique.
    pub id: u64,

    /// Ids of the two parents. `[0, 0]` for first-generation founders.
    pub parent_ids: [u64; 2],

    /// Fitness score, higher is better. `0.0` until evaluated.
    pub fitness: f64,

    /// Genes in `[0.0, 1.0)`. Length is constant for the entire run.
    pub genome: Vec<f64>,
}

impl Individual {
    /// Creates a first-generation founder: random id, no ancestry,
    /// uniformly random genome.
    pub fn founder<R: Rng>(num_genes: usize, rng: &mut R) -> Self {
        Self {
            id: rng.random(),
            parent_ids: [0, 0],
            fitness: 0.0,
            genome: (0..num_genes).map(|_| rng.random_range(0.0..1.0)).collect(),
        }
    }

    /// Returns `true` if this individual has no recorded ancestry.
    pub fn is_founder(&self) -> bool {
        self.parent_ids == [0, 0]
    }
}

/// Renders the single-line generation record: id, both parent ids, fitness
/// at six decimals, then each gene at six decimals, space-separated.
impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.6}",
            self.id, self.parent_ids[0], self.parent_ids[1], self.fitness
        )?;
        for gene in &self.genome {
            write!(f, " {gene:.6}")?;
        }
        Ok(())
    }
}

/// Comparator for selection order: fitness descending, ties arbitrary.
///
/// NaN fitness compares equal to everything, which keeps the sort a valid
/// total order without panicking.
pub fn by_fitness_desc(a: &Individual, b: &Individual) -> Ordering {
    b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal)
}

/// Fitness evaluator plugged in by the caller.
///
/// The dispatcher hands each implementation an exclusive mutable slice —
/// one colony — and the implementation must fill `fitness` for every
/// individual in it. Evaluations of different colonies may run concurrently
/// and must not assume any global ordering or cross-colony visibility.
///
/// # Examples
///
/// ```
/// use colony_evo::{ColonyEvaluator, Individual};
///
/// /// Fitness is the sum of all genes.
/// struct SumEvaluator;
///
/// impl ColonyEvaluator for SumEvaluator {
///     fn evaluate(&self, colony: &mut [Individual]) {
///         for ind in colony {
///             ind.fitness = ind.genome.iter().sum();
///         }
///     }
/// }
/// ```
pub trait ColonyEvaluator: Send + Sync {
    /// Fills in the fitness of every individual in `colony`.
    fn evaluate(&self, colony: &mut [Individual]);
}

/// Per-generation reporting sink.
///
/// Called once per generation with the fully evaluated population, before
/// breeding replaces it.
pub trait GenerationSink {
    /// Reports one evaluated generation.
    fn report(&mut self, population: &[Individual], generation: usize);
}

/// Default sink: prints a `Generation {n}` header followed by one
/// [`Individual`] record per line to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl GenerationSink for StdoutSink {
    fn report(&mut self, population: &[Individual], generation: usize) {
        println!("Generation {generation}");
        for ind in population {
            println!("{ind}");
        }
    }
}

/// Sink writing the same text format as [`StdoutSink`] to any writer.
///
/// Write failures are swallowed: reporting is best-effort and must never
/// abort the generation loop.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_report(&mut self, population: &[Individual], generation: usize) -> io::Result<()> {
        writeln!(self.writer, "Generation {generation}")?;
        for ind in population {
            writeln!(self.writer, "{ind}")?;
        }
        Ok(())
    }
}

impl<W: Write> GenerationSink for WriterSink<W> {
    fn report(&mut self, population: &[Individual], generation: usize) {
        let _ = self.write_report(population, generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_founder_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let ind = Individual::founder(30, &mut rng);

        assert_eq!(ind.genome.len(), 30);
        assert_eq!(ind.parent_ids, [0, 0]);
        assert!(ind.is_founder());
        assert!((ind.fitness - 0.0).abs() < f64::EPSILON);
        assert!(ind.genome.iter().all(|g| (0.0..1.0).contains(g)));
    }

    #[test]
    fn test_record_format() {
        let ind = Individual {
            id: 7,
            parent_ids: [3, 5],
            fitness: 1.5,
            genome: vec![0.25, 0.5],
        };

        assert_eq!(ind.to_string(), "7 3 5 1.500000 0.250000 0.500000");
    }

    #[test]
    fn test_record_token_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let ind = Individual::founder(30, &mut rng);
        let record = ind.to_string();
        let tokens: Vec<&str> = record.split(' ').collect();

        // id + 2 parents + fitness + 30 genes
        assert_eq!(tokens.len(), 34);
    }

    #[test]
    fn test_fitness_desc_ordering() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pop: Vec<Individual> =
            (0..5).map(|_| Individual::founder(2, &mut rng)).collect();
        for (i, ind) in pop.iter_mut().enumerate() {
            ind.fitness = i as f64;
        }

        pop.sort_by(by_fitness_desc);

        for window in pop.windows(2) {
            assert!(window[0].fitness >= window[1].fitness);
        }
    }

    #[test]
    fn test_unset_fitness_sorts_last() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut evaluated = Individual::founder(2, &mut rng);
        evaluated.fitness = 0.5;
        let unevaluated = Individual::founder(2, &mut rng);

        let mut pop = vec![unevaluated.clone(), evaluated.clone()];
        pop.sort_by(by_fitness_desc);

        assert_eq!(pop[0].id, evaluated.id);
        assert_eq!(pop[1].id, unevaluated.id);
    }

    #[test]
    fn test_writer_sink_line_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let pop: Vec<Individual> = (0..4).map(|_| Individual::founder(2, &mut rng)).collect();

        let mut sink = WriterSink::new(Vec::new());
        sink.report(&pop, 0);

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Generation 0");
    }
}
