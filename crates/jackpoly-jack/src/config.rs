//! Evaluation configuration.

/// How a floating-point Jack parameter is turned into an exact rational.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RealParameterPolicy {
    /// Use the exact binary value of the float (`0.1` becomes
    /// `3602879701896397/36028797018963968`).
    Exact,
    /// Use the closest rational whose denominator does not exceed the bound.
    Approximate {
        /// Largest admissible denominator.
        max_denominator: u64,
    },
    /// Refuse floating-point parameters.
    Reject,
}

/// Configuration for [`jack_pol_with`](crate::jack_pol_with).
#[derive(Clone, Debug)]
pub struct JackConfig {
    /// Treatment of `f64` parameters.
    pub real_parameter: RealParameterPolicy,
}

impl Default for JackConfig {
    fn default() -> Self {
        Self {
            real_parameter: RealParameterPolicy::Approximate {
                max_denominator: 1_000_000,
            },
        }
    }
}

impl JackConfig {
    /// Sets the real-parameter policy.
    #[must_use]
    pub fn with_real_parameter(mut self, policy: RealParameterPolicy) -> Self {
        self.real_parameter = policy;
        self
    }
}
