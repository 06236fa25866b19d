//! An in-memory bank account with a one-time overdraft, modelled as a command/event aggregate.
//!
//! ```
//! use bank_account::account::{Account, Withdrawal};
//!
//! let mut account = Account::new();
//! account.open();
//! account.deposit(100.0).unwrap();
//!
//! assert_eq!(account.withdraw(150.0).unwrap(), Withdrawal::Overdraft);
//! assert_eq!(account.balance(), -50.0);
//! assert!(account.withdraw(100.0).is_err());
//! ```

pub use crate::aggregate::Aggregate;
pub use crate::event::{EmittedEvent, Event};
pub use crate::handler::EventHandler;
pub use crate::manager::AggregateManager;
pub use crate::state::AggregateState;

pub mod account;

mod aggregate;
mod event;
mod handler;
mod manager;
mod state;

pub type SequenceNumber = i32;
