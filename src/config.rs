//! Run configuration.
//!
//! [`EvoConfig`] holds every parameter of the generation loop. All values
//! are fixed at startup; the runner validates them once before generation 0
//! and never re-reads them from anywhere else.

/// Configuration for one evolution run.
///
/// The population is partitioned into `num_colonies` contiguous colonies of
/// `individuals_per_colony` members each, so the population size is always
/// their product.
///
/// # Defaults
///
/// ```
/// use colony_evo::EvoConfig;
///
/// let config = EvoConfig::default();
/// assert_eq!(config.population_size(), 100);
/// assert_eq!(config.num_generations, 300);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use colony_evo::EvoConfig;
///
/// let config = EvoConfig::default()
///     .with_colonies(4, 25)
///     .with_num_genes(16)
///     .with_children_per_generation(5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvoConfig {
    /// Number of colonies evaluated concurrently each generation.
    pub num_colonies: usize,

    /// Number of individuals in each colony.
    pub individuals_per_colony: usize,

    /// Genes per genome. Constant for the entire run.
    pub num_genes: usize,

    /// Number of evaluate → report → breed cycles to execute.
    pub num_generations: usize,

    /// Number of unique children bred per generation.
    pub children_per_generation: usize,

    /// Size of the top-fitness mating cohort.
    ///
    /// Must equal `2 * children_per_generation`: the cohort is consumed as
    /// consecutive pairs, one child per pair.
    pub winners_per_generation: usize,

    /// Per-gene probability that recombination replaces the gene with a
    /// fresh uniform draw instead of inheriting it (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to evaluate colonies in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvoConfig {
    fn default() -> Self {
        Self {
            num_colonies: 10,
            individuals_per_colony: 10,
            num_genes: 30,
            num_generations: 300,
            children_per_generation: 2,
            winners_per_generation: 4,
            mutation_rate: 0.01,
            parallel: true,
            seed: None,
        }
    }
}

impl EvoConfig {
    /// Total population size (`num_colonies * individuals_per_colony`).
    pub fn population_size(&self) -> usize {
        self.num_colonies * self.individuals_per_colony
    }

    /// Sets the colony topology.
    pub fn with_colonies(mut self, num_colonies: usize, individuals_per_colony: usize) -> Self {
        self.num_colonies = num_colonies;
        self.individuals_per_colony = individuals_per_colony;
        self
    }

    /// Sets the genome length.
    pub fn with_num_genes(mut self, n: usize) -> Self {
        self.num_genes = n;
        self
    }

    /// Sets the number of generations to run.
    pub fn with_num_generations(mut self, n: usize) -> Self {
        self.num_generations = n;
        self
    }

    /// Sets the number of unique children per generation.
    ///
    /// Also re-derives `winners_per_generation` as twice this value, keeping
    /// the pair/child relationship intact.
    pub fn with_children_per_generation(mut self, n: usize) -> Self {
        self.children_per_generation = n;
        self.winners_per_generation = n * 2;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel colony evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid. All
    /// violations here are configuration errors: the runner treats them as
    /// fatal before the first generation, never as runtime conditions.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_colonies == 0 {
            return Err("num_colonies must be at least 1".into());
        }
        if self.individuals_per_colony == 0 {
            return Err("individuals_per_colony must be at least 1".into());
        }
        if self.num_genes == 0 {
            return Err("num_genes must be at least 1".into());
        }
        if self.num_generations == 0 {
            return Err("num_generations must be at least 1".into());
        }
        if self.children_per_generation == 0 {
            return Err("children_per_generation must be at least 1".into());
        }
        if self.winners_per_generation != self.children_per_generation * 2 {
            return Err(format!(
                "winners_per_generation ({}) must equal 2 * children_per_generation ({})",
                self.winners_per_generation, self.children_per_generation
            ));
        }
        if self.winners_per_generation > self.population_size() {
            return Err(format!(
                "winners_per_generation ({}) exceeds population size ({})",
                self.winners_per_generation,
                self.population_size()
            ));
        }
        if self.population_size() % self.children_per_generation != 0 {
            return Err(format!(
                "population size ({}) must be a multiple of children_per_generation ({})",
                self.population_size(),
                self.children_per_generation
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0.0, 1.0]".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvoConfig::default();
        assert_eq!(config.num_colonies, 10);
        assert_eq!(config.individuals_per_colony, 10);
        assert_eq!(config.population_size(), 100);
        assert_eq!(config.num_genes, 30);
        assert_eq!(config.num_generations, 300);
        assert_eq!(config.children_per_generation, 2);
        assert_eq!(config.winners_per_generation, 4);
        assert!((config.mutation_rate - 0.01).abs() < 1e-10);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvoConfig::default()
            .with_colonies(4, 25)
            .with_num_genes(8)
            .with_num_generations(50)
            .with_children_per_generation(5)
            .with_mutation_rate(0.05)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.num_colonies, 4);
        assert_eq!(config.individuals_per_colony, 25);
        assert_eq!(config.num_genes, 8);
        assert_eq!(config.num_generations, 50);
        assert_eq!(config.children_per_generation, 5);
        assert_eq!(config.winners_per_generation, 10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_colonies() {
        let config = EvoConfig::default().with_colonies(0, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_genes() {
        let config = EvoConfig::default().with_num_genes(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvoConfig::default().with_num_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_winner_child_relation() {
        let mut config = EvoConfig::default();
        config.winners_per_generation = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_winners_exceed_population() {
        let config = EvoConfig::default()
            .with_colonies(1, 3)
            .with_children_per_generation(3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_uneven_replication() {
        // 100 individuals cannot be split evenly across 3 children.
        let config = EvoConfig::default().with_children_per_generation(3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = EvoConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);

        let config = EvoConfig::default().with_mutation_rate(-0.5);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }
}
