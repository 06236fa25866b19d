use crate::account::command::AccountCommand;
use crate::account::error::AccountError;
use crate::account::event::AccountEvent;
use crate::account::state::{is_valid_amount, AccountState};
use crate::Aggregate;

pub struct AccountAggregate;

impl Aggregate for AccountAggregate {
    const NAME: &'static str = "bank_account";
    type State = AccountState;
    type Command = AccountCommand;
    type Event = AccountEvent;
    type Error = AccountError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            AccountCommand::Open if state.is_open => Err(AccountError::AlreadyOpen),
            AccountCommand::Open => Ok(vec![AccountEvent::Opened]),
            AccountCommand::Close if !state.is_open => Err(AccountError::AccountClosed),
            AccountCommand::Close if state.balance != 0.0 => Err(AccountError::NonZeroBalance {
                balance: state.balance,
            }),
            AccountCommand::Close => Ok(vec![AccountEvent::Closed]),
            AccountCommand::Deposit { .. } if !state.is_open => Err(AccountError::AccountClosed),
            AccountCommand::Deposit { amount } if !is_valid_amount(amount) => {
                Err(AccountError::InvalidAmount { amount })
            }
            AccountCommand::Deposit { amount } => Ok(vec![AccountEvent::Deposited { amount }]),
            AccountCommand::Withdraw { amount } => {
                let withdrawal = state.check_withdrawal(amount)?;
                Ok(vec![withdrawal.into_event(amount)])
            }
        }
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        match payload {
            AccountEvent::Opened => AccountState { is_open: true, ..state },
            AccountEvent::Closed => AccountState { is_open: false, ..state },
            AccountEvent::Deposited { amount } => state.add_amount(amount),
            AccountEvent::Withdrawn { amount } => state.sub_amount(amount),
            AccountEvent::OverdraftWithdrawn { amount } => AccountState {
                has_overdraft: true,
                ..state.sub_amount(amount)
            },
        }
    }
}
