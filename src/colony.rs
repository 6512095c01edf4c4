//! Colony dispatcher.
//!
//! Partitions the population into contiguous, equal-sized, non-overlapping
//! colonies and evaluates them concurrently. Each colony is an exclusive
//! mutable slice, so evaluators never alias and no locking is needed for
//! the fitness writes.

use rayon::prelude::*;

use crate::types::{ColonyEvaluator, Individual};

/// Evaluates every colony of the population and returns once all of them
/// have finished.
///
/// With `parallel` set, one rayon task is dispatched per colony and the
/// call joins on all of them (barrier semantics — colonies may finish in
/// any order, but none is left behind). There is no timeout: an evaluator
/// that never returns stalls the whole run.
///
/// `colony_size` must divide `population.len()` evenly; the configuration
/// layer guarantees this before the loop starts.
pub(crate) fn evaluate_colonies<E: ColonyEvaluator>(
    evaluator: &E,
    population: &mut [Individual],
    colony_size: usize,
    parallel: bool,
) {
    if parallel {
        population
            .par_chunks_mut(colony_size)
            .for_each(|colony| evaluator.evaluate(colony));
    } else {
        for colony in population.chunks_mut(colony_size) {
            evaluator.evaluate(colony);
        }
    }
}
