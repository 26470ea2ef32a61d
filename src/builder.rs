use crate::engine::{PathEngine, SolveMode};
use crate::utils::DEFAULT_RECURSION_LIMIT;

pub struct PathEngineBuilder {
    mode: SolveMode,
    recursion_limit: Option<usize>,
}

impl PathEngineBuilder {
    pub fn new(mode: SolveMode) -> Self {
        Self {
            mode,
            recursion_limit: None,
        }
    }
    pub fn mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self
    }
    /// Widest grid (in columns) the recursive mode will accept.
    pub fn with_recursion_limit(mut self, recursion_limit: usize) -> Self {
        self.recursion_limit = Some(recursion_limit);
        self
    }
    pub fn build(self) -> PathEngine {
        match self.recursion_limit {
            Some(limit) => PathEngine::with_recursion_limit(self.mode, limit),
            None => PathEngine::with_recursion_limit(self.mode, DEFAULT_RECURSION_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PathEngineBuilder;
    use crate::engine::SolveMode;
    use crate::utils::DEFAULT_RECURSION_LIMIT;

    #[test]
    fn defaults() {
        let engine = PathEngineBuilder::new(SolveMode::Recursive).build();
        assert_eq!(engine.mode(), SolveMode::Recursive);
        assert_eq!(engine.recursion_limit(), DEFAULT_RECURSION_LIMIT);
    }

    #[test]
    fn overrides() {
        let engine = PathEngineBuilder::new(SolveMode::Recursive)
            .mode(SolveMode::DynamicProgramming)
            .with_recursion_limit(8)
            .build();
        assert_eq!(engine.mode(), SolveMode::DynamicProgramming);
        assert_eq!(engine.recursion_limit(), 8);
    }
}
