use serde::{Deserialize, Serialize};

/// What to do when an average or a per-call figure would divide by zero
/// (a worker with no steps, an operator with no calls).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisorPolicy {
    /// Fail with [`crate::GenerateError::DegenerateInput`].
    #[default]
    Error,
    /// Report the quotient as zero.
    Zero,
}

/// How a timeline step reported by some workers but not others is filled in
/// for the workers that did not report it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStepPolicy {
    /// Leave the worker out of that step.
    #[default]
    Omit,
    /// Give the worker a zero vector for that step.
    Zero,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub divisor_policy: DivisorPolicy,
    pub missing_steps: MissingStepPolicy,
}

impl GeneratorConfig {
    pub fn with_divisor_policy(mut self, policy: DivisorPolicy) -> Self {
        self.divisor_policy = policy;
        self
    }

    pub fn with_missing_steps(mut self, policy: MissingStepPolicy) -> Self {
        self.missing_steps = policy;
        self
    }

    /// Divide `num` by `den`, applying the divisor policy when `den` is zero.
    /// `on_zero` builds the error and is only called when it is needed.
    pub(crate) fn divide<E>(
        &self,
        num: f64,
        den: f64,
        on_zero: impl FnOnce() -> E,
    ) -> Result<f64, E> {
        if den != 0.0 {
            return Ok(num / den);
        }
        match self.divisor_policy {
            DivisorPolicy::Error => Err(on_zero()),
            DivisorPolicy::Zero => Ok(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GeneratorConfig::default();
        assert_eq!(c.divisor_policy, DivisorPolicy::Error);
        assert_eq!(c.missing_steps, MissingStepPolicy::Omit);
    }

    #[test]
    fn test_partial_json() {
        let c: GeneratorConfig = serde_json::from_str(r#"{"divisor_policy": "zero"}"#).unwrap();
        assert_eq!(c.divisor_policy, DivisorPolicy::Zero);
        assert_eq!(c.missing_steps, MissingStepPolicy::Omit);
    }

    #[test]
    fn test_divide() {
        let c = GeneratorConfig::default();
        assert_eq!(c.divide(10.0, 4.0, || "zero"), Ok(2.5));
        assert_eq!(c.divide(10.0, 0.0, || "zero"), Err("zero"));
        let c = c.with_divisor_policy(DivisorPolicy::Zero);
        assert_eq!(c.divide(10.0, 0.0, || "zero"), Ok(0.0));
    }
}
