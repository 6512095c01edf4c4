//! Colony-based generational evolution engine.
//!
//! Maintains a fixed-size population of candidate solutions, evaluates
//! their fitness through a caller-supplied [`ColonyEvaluator`], and derives
//! each next generation by truncation selection, random pairing, per-gene
//! recombination with mutation, and offspring replication.
//!
//! # Model
//!
//! - The population is partitioned into contiguous, equal-sized **colonies**
//!   that are evaluated concurrently; the loop blocks until every colony has
//!   finished before selection begins.
//! - **Fitness is maximized.** The top `winners_per_generation` individuals
//!   form the mating cohort; consecutive random pairs each produce one
//!   child, and the children are replicated (with fresh random ids) back up
//!   to the full population size.
//! - Each generation is a new population value; individuals are never
//!   shared across generations.
//!
//! # Key Types
//!
//! - [`EvoConfig`]: run parameters (colony topology, genome length,
//!   generation count, breeding cohort sizes, seed)
//! - [`EvoRunner`]: executes the generation loop
//! - [`ColonyEvaluator`]: the fitness plug-in implemented by the caller
//! - [`GenerationSink`]: per-generation reporting ([`StdoutSink`],
//!   [`WriterSink`])

mod breeder;
mod colony;
mod config;
mod runner;
mod types;

pub use config::EvoConfig;
pub use runner::{EvoResult, EvoRunner};
pub use types::{
    by_fitness_desc, ColonyEvaluator, GenerationSink, Individual, StdoutSink, WriterSink,
};
