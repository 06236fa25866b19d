//! The bank account aggregate and its [`Account`] facade.
//!
//! Every operation of the facade is turned into an [`AccountCommand`], validated by
//! [`AccountAggregate`] and, when accepted, applied as one [`AccountEvent`]. Rejected operations
//! leave the account untouched and report why through [`AccountError`].

use uuid::Uuid;

pub use aggregate::AccountAggregate;
pub use command::AccountCommand;
pub use error::AccountError;
pub use event::{AccountEvent, Withdrawal};
pub use policy::OverdraftPolicy;
pub use state::AccountState;
pub use status::StatusReporter;

use crate::{AggregateManager, AggregateState, EmittedEvent, EventHandler, SequenceNumber};

mod aggregate;
mod command;
mod error;
mod event;
mod policy;
mod state;
mod status;

pub struct Account {
    state: AggregateState<AccountState>,
    manager: AggregateManager<AccountAggregate>,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    /// A closed account with zero balance and the default overdraft policy.
    pub fn new() -> Self {
        Self::with_policy(OverdraftPolicy::default())
    }

    pub fn with_policy(policy: OverdraftPolicy) -> Self {
        Self {
            state: AggregateState::with_state(Uuid::new_v4(), AccountState::new(policy)),
            manager: AggregateManager::new(vec![Box::new(StatusReporter)]),
        }
    }

    /// Registers an additional handler, run after the status reporter for every event.
    pub fn with_handler(mut self, event_handler: impl EventHandler<AccountAggregate> + 'static) -> Self {
        self.manager.add_event_handler(event_handler);
        self
    }

    /// Opens the account. Returns false if it was already open, in which case nothing changes.
    pub fn open(&mut self) -> bool {
        self.execute(AccountCommand::Open).is_ok()
    }

    /// Closes the account. Only an open account with a balance of exactly zero can be closed.
    pub fn close(&mut self) -> Result<(), AccountError> {
        self.execute(AccountCommand::Close).map(|_| ())
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), AccountError> {
        self.execute(AccountCommand::Deposit { amount }).map(|_| ())
    }

    /// Withdraws `amount`, falling back to the one-time overdraft when the balance is not enough.
    pub fn withdraw(&mut self, amount: f64) -> Result<Withdrawal, AccountError> {
        let events = self.execute(AccountCommand::Withdraw { amount })?;

        match events.first().map(EmittedEvent::payload) {
            Some(AccountEvent::OverdraftWithdrawn { .. }) => Ok(Withdrawal::Overdraft),
            _ => Ok(Withdrawal::Ordinary),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.inner().is_open()
    }

    pub fn has_positive_balance(&self) -> bool {
        self.state.inner().has_positive_balance()
    }

    pub fn balance(&self) -> f64 {
        self.state.inner().balance()
    }

    pub fn has_overdraft(&self) -> bool {
        self.state.inner().has_overdraft()
    }

    pub fn id(&self) -> &Uuid {
        self.state.id()
    }

    /// Number of operations that changed the account so far.
    pub fn sequence_number(&self) -> &SequenceNumber {
        self.state.sequence_number()
    }

    pub fn state(&self) -> &AggregateState<AccountState> {
        &self.state
    }

    fn execute(&mut self, command: AccountCommand) -> Result<Vec<EmittedEvent<AccountEvent>>, AccountError> {
        self.manager.handle_command(&mut self.state, command)
    }
}
