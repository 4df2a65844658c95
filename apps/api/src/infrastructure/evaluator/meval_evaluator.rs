use super::traits::{EvaluationError, ExpressionEvaluator};
use std::any::Any;
use std::panic;

/// Evaluator backed by the `meval` crate.
///
/// Supports `+ - * / % ^`, parentheses, the constants `pi` and `e`, and the
/// builtin functions (`sin`, `cos`, `tan`, `sqrt`, `abs`, `exp`, `ln`, `floor`, ...).
/// Trigonometric functions take radians.
#[derive(Debug, Default, Clone, Copy)]
pub struct MevalEvaluator;

impl MevalEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl ExpressionEvaluator for MevalEvaluator {
    fn evaluate(&self, expression: &str) -> Result<String, EvaluationError> {
        // meval panics on some malformed input (whitespace only, for one)
        // instead of returning a parse error.
        match panic::catch_unwind(|| meval::eval_str(expression)) {
            Ok(evaluated) => evaluated
                .map(render_number)
                .map_err(|e| EvaluationError(e.to_string())),
            Err(payload) => Err(EvaluationError(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unable to parse expression".to_string()
    }
}

/// Render a number the way browser clients print it: shortest round-trip digits,
/// exponent notation outside `[1e-6, 1e21)`, and `Infinity` / `NaN` spelled out.
pub fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
