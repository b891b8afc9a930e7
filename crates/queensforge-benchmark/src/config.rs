//! Benchmark configuration.

/// Configuration for a benchmark run.
///
/// Controls warmup iterations, measurement runs, seeding, parallelism and
/// optional output paths.
///
/// # Example
///
/// ```
/// use queensforge_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_warmup_count(3)
///     .with_run_count(10)
///     .with_base_seed(7)
///     .with_parallel(true);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// assert_eq!(config.seed_for_run(2), 9);
/// assert!(config.parallel());
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    warmup_count: usize,
    run_count: usize,
    base_seed: u64,
    parallel: bool,
    csv_output_path: Option<String>,
    markdown_output_path: Option<String>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - warmup_count: 1
    /// - run_count: 10
    /// - base_seed: 0
    /// - parallel: false
    ///
    /// # Example
    ///
    /// ```
    /// use queensforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.warmup_count(), 1);
    /// assert_eq!(config.run_count(), 10);
    /// assert!(!config.parallel());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warmup_count: 1,
            run_count: 10,
            base_seed: 0,
            parallel: false,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the seed of the first measured run. Run `i` uses `base_seed + i`.
    pub fn with_base_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }

    /// Runs measurements on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use queensforge_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some("results.csv"));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<String>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for the Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<String>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Seed used by measured run `run_index`.
    pub fn seed_for_run(&self, run_index: usize) -> u64 {
        self.base_seed.wrapping_add(run_index as u64)
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&str> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&str> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new("Benchmark")
    }
}
