#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountCommand {
    Open,
    Close,
    Deposit { amount: f64 },
    Withdraw { amount: f64 },
}
