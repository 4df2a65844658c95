pub mod meval_evaluator;
pub mod traits;
