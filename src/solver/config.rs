//! Search configuration

/// How far the exhaustive guess loop reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Every state searches over all candidate guesses (optimal, slowest)
    #[default]
    Full,
    /// Only the state handed to the solver searches all guesses; deeper states commit to
    /// their first candidate and average over answers in a single loop
    RootOnly,
}

impl SearchMode {
    /// Parse a mode name: "full" or "root-only"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::Full),
            "root-only" | "root" => Some(Self::RootOnly),
            _ => None,
        }
    }
}

/// Tunable parameters of the expectation search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Total guesses allowed in one game
    pub max_attempts: usize,
    /// Penalty per attempt already used, subtracted from the last-attempt win probability
    pub step_cost: f64,
    pub mode: SearchMode,
    /// Evaluate the root guesses on the rayon thread pool
    pub parallel: bool,
}

impl SearchConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            step_cost: 0.0,
            mode: SearchMode::Full,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn with_step_cost(mut self, step_cost: f64) -> Self {
        self.step_cost = step_cost;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert!(config.step_cost.abs() < f64::EPSILON);
        assert_eq!(config.mode, SearchMode::Full);
        assert!(config.parallel);
    }

    #[test]
    fn builder_overrides() {
        let config = SearchConfig::new(3)
            .with_step_cost(0.01)
            .with_mode(SearchMode::RootOnly)
            .with_parallel(false);
        assert_eq!(config.max_attempts, 3);
        assert!((config.step_cost - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.mode, SearchMode::RootOnly);
        assert!(!config.parallel);
    }

    #[test]
    fn mode_from_name() {
        assert_eq!(SearchMode::from_name("full"), Some(SearchMode::Full));
        assert_eq!(SearchMode::from_name("root-only"), Some(SearchMode::RootOnly));
        assert_eq!(SearchMode::from_name("greedy"), None);
    }
}
