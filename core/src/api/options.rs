use crate::evaluator::EvaluatorOptions;
use crate::solver::SolverOptions;

/// Default ceiling on input length, in chars.
pub const DEFAULT_MAX_INPUT_LEN: usize = 220;

/// Everything a [`Calculator`](super::Calculator) can be tuned with.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorOptions {
    /// Longest accepted input, checked on the raw text and again after
    /// normalization.
    pub max_input_len: usize,
    pub evaluator: EvaluatorOptions,
    pub solver: SolverOptions,
}

impl CalculatorOptions {
    pub const DEFAULT: Self = CalculatorOptions {
        max_input_len: DEFAULT_MAX_INPUT_LEN,
        evaluator: EvaluatorOptions::DEFAULT,
        solver: SolverOptions::DEFAULT,
    };
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}
