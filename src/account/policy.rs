use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

const DEFAULT_COVERAGE: f64 = 0.5;

/// Rules deciding whether a withdrawal the balance can't cover may still go through as an overdraft.
#[derive(TypedBuilder, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct OverdraftPolicy {
    /// When false every withdrawal larger than the balance is rejected.
    #[builder(default = true)]
    pub(crate) enabled: bool,
    /// Fraction of the requested amount the balance must strictly exceed for the overdraft to be
    /// granted. With the default of one half a balance of 100 allows withdrawing up to (but not
    /// including) 200.
    #[builder(default = DEFAULT_COVERAGE)]
    pub(crate) coverage: f64,
}

impl Default for OverdraftPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            coverage: DEFAULT_COVERAGE,
        }
    }
}

impl OverdraftPolicy {
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    pub const fn coverage(&self) -> f64 {
        self.coverage
    }

    /// Whether `balance` is large enough to back an overdraft of `amount`. This does not look at
    /// `enabled` nor at whether the overdraft has already been used.
    pub fn covers(&self, balance: f64, amount: f64) -> bool {
        balance > amount * self.coverage
    }
}
