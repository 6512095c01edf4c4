//! Generation breeder.
//!
//! Transforms one fully evaluated population into the next generation:
//! truncation selection of the top-fitness cohort, random pairing,
//! per-gene recombination with mutation, and cyclic replication back up to
//! the original population size.

use rand::Rng;

use crate::config::EvoConfig;
use crate::types::{by_fitness_desc, Individual};

/// Random permutation by key-sort: every element gets a freshly drawn
/// uniform `u64` key, and the sequence is reordered by key.
///
/// Keys are transient and never stored on the individuals themselves.
/// Duplicate keys ruin nothing; ties just break arbitrarily.
pub(crate) fn shuffle<T, R: Rng>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    let mut keyed: Vec<(u64, T)> = items.into_iter().map(|item| (rng.random(), item)).collect();
    keyed.sort_unstable_by_key(|pair| pair.0);
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Produces one child from two parents.
///
/// Each gene is decided independently: with probability `mutation_rate` it
/// is a fresh uniform draw in `[0.0, 1.0)`; otherwise it is copied verbatim
/// from either parent with equal probability. The child records both parent
/// ids, starts unevaluated, and carries `id == 0` — the breeder assigns the
/// real random id at replication time.
pub(crate) fn mate<R: Rng>(
    p1: &Individual,
    p2: &Individual,
    mutation_rate: f64,
    rng: &mut R,
) -> Individual {
    let genome = p1
        .genome
        .iter()
        .zip(&p2.genome)
        .map(|(&a, &b)| {
            if rng.random_range(0.0..1.0) < mutation_rate {
                rng.random_range(0.0..1.0)
            } else if rng.random_bool(0.5) {
                a
            } else {
                b
            }
        })
        .collect();

    Individual {
        id: 0,
        parent_ids: [p1.id, p2.id],
        fitness: 0.0,
        genome,
    }
}

/// Breeds the next generation from a fully evaluated population.
///
/// 1. Sorts a copy by fitness descending and takes the top
///    `winners_per_generation` as the mating cohort.
/// 2. Shuffles the cohort and mates consecutive pairs, one child per pair.
/// 3. Replicates the children cyclically until the population is back to
///    its original size, giving every replicate a fresh random id.
/// 4. Shuffles the result so next-round colony membership does not
///    correlate with selection or family structure.
///
/// The evaluated population is consumed, never mutated: each generation is
/// a new value.
pub(crate) fn breed<R: Rng>(
    population: Vec<Individual>,
    config: &EvoConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let mut ranked = population;
    ranked.sort_by(by_fitness_desc);

    let winners = shuffle(ranked[..config.winners_per_generation].to_vec(), rng);

    let children: Vec<Individual> = winners
        .chunks_exact(2)
        .map(|pair| mate(&pair[0], &pair[1], config.mutation_rate, rng))
        .collect();

    let next: Vec<Individual> = (0..config.population_size())
        .map(|k| {
            let mut replicate = children[k % children.len()].clone();
            replicate.id = rng.random();
            replicate
        })
        .collect();

    shuffle(next, rng)
}
