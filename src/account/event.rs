use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum AccountEvent {
    Opened,
    Closed,
    Deposited { amount: f64 },
    Withdrawn { amount: f64 },
    /// The one-time overdraft has been spent on this withdrawal.
    OverdraftWithdrawn { amount: f64 },
}

/// The status line reported for each event.
impl Display for AccountEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened => write!(f, "Account opened successfully."),
            Self::Closed => write!(f, "Account closed successfully."),
            Self::Deposited { amount } => write!(f, "Deposited: {}", amount),
            Self::Withdrawn { amount } => write!(f, "Withdrew: {}", amount),
            Self::OverdraftWithdrawn { amount } => write!(f, "Withdrew with overdraft: {}", amount),
        }
    }
}

/// How an accepted withdrawal has been funded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    /// The balance covered the whole amount.
    Ordinary,
    /// The balance went negative using the one-time overdraft.
    Overdraft,
}

impl Withdrawal {
    pub(crate) const fn into_event(self, amount: f64) -> AccountEvent {
        match self {
            Self::Ordinary => AccountEvent::Withdrawn { amount },
            Self::Overdraft => AccountEvent::OverdraftWithdrawn { amount },
        }
    }
}
