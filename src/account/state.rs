use crate::account::error::AccountError;
use crate::account::event::Withdrawal;
use crate::account::policy::OverdraftPolicy;

#[derive(Default, Debug, Clone, PartialEq)]
pub struct AccountState {
    pub(crate) balance: f64,
    pub(crate) is_open: bool,
    pub(crate) has_overdraft: bool,
    pub(crate) policy: OverdraftPolicy,
}

impl AccountState {
    /// A closed account with zero balance, governed by `policy`.
    pub fn new(policy: OverdraftPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub const fn balance(&self) -> f64 {
        self.balance
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Once true it stays true: the overdraft is granted once per account.
    pub const fn has_overdraft(&self) -> bool {
        self.has_overdraft
    }

    pub const fn policy(&self) -> &OverdraftPolicy {
        &self.policy
    }

    pub fn has_positive_balance(&self) -> bool {
        self.balance > 0.0
    }

    /// Decides how a withdrawal of `amount` would be funded, or why it can't be.
    pub fn check_withdrawal(&self, amount: f64) -> Result<Withdrawal, AccountError> {
        if !self.is_open {
            return Err(AccountError::AccountClosed);
        }

        if !is_valid_amount(amount) {
            return Err(AccountError::InvalidAmount { amount });
        }

        if self.balance >= amount {
            return Ok(Withdrawal::Ordinary);
        }

        if !self.policy.covers(self.balance, amount) {
            return Err(AccountError::InsufficientFunds {
                balance: self.balance,
                amount,
            });
        }

        if self.has_overdraft || !self.policy.enabled() {
            return Err(AccountError::OverdraftUnavailable);
        }

        Ok(Withdrawal::Overdraft)
    }

    pub(crate) fn add_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance + amount,
            ..self
        }
    }

    pub(crate) fn sub_amount(self, amount: f64) -> Self {
        Self {
            balance: self.balance - amount,
            ..self
        }
    }
}

/// Amounts must be strictly positive and finite.
pub(crate) fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}
