use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("Account is already open.")]
    AlreadyOpen,

    #[error("Account is closed.")]
    AccountClosed,

    #[error("Cannot close account. Ensure balance is zero. Current balance: {balance}")]
    NonZeroBalance { balance: f64 },

    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Insufficient funds: balance {balance}, requested {amount}")]
    InsufficientFunds { balance: f64, amount: f64 },

    #[error("Insufficient funds and overdraft not allowed.")]
    OverdraftUnavailable,
}
