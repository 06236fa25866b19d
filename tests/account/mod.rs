use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use bank_account::account::{Account, AccountError, AccountEvent, OverdraftPolicy, Withdrawal};

pub use event_handler::*;


fn open_account() -> Account {
    let mut account = Account::new();
    assert!(account.open());
    account
}

#[test]
fn open_account_test() {
    let mut account = Account::new();
    assert!(!account.is_open());
    assert_eq!(account.balance(), 0.0);

    assert!(account.open());
    assert!(account.is_open());

    // Opening twice is idempotent.
    assert!(!account.open());
    assert!(account.is_open());
    assert_eq!(*account.sequence_number(), 1);
}

#[test]
fn deposit_funds_test() {
    let mut account = open_account();

    account.deposit(100.0).unwrap();
    assert_eq!(account.balance(), 100.0);

    assert_eq!(account.deposit(0.0), Err(AccountError::InvalidAmount { amount: 0.0 }));
    assert_eq!(account.deposit(-20.0), Err(AccountError::InvalidAmount { amount: -20.0 }));
    assert_eq!(account.balance(), 100.0);
}

#[test]
fn deposit_on_closed_account_test() {
    let mut account = Account::new();

    assert_eq!(account.deposit(100.0), Err(AccountError::AccountClosed));
    assert_eq!(account.balance(), 0.0);
    assert_eq!(*account.sequence_number(), 0);
}

#[test]
fn withdraw_funds_with_positive_balance_test() {
    let mut account = open_account();
    account.deposit(200.0).unwrap();

    assert_eq!(account.withdraw(100.0), Ok(Withdrawal::Ordinary));
    assert_eq!(account.balance(), 100.0);
    assert!(account.has_positive_balance());
    assert!(!account.has_overdraft());
}

#[test]
fn withdraw_funds_with_insufficient_balance_test() {
    let mut account = open_account();
    account.deposit(50.0).unwrap();

    // The balance must strictly exceed half of the amount for the overdraft to kick in.
    assert_eq!(
        account.withdraw(100.0),
        Err(AccountError::InsufficientFunds {
            balance: 50.0,
            amount: 100.0
        })
    );
    assert_eq!(account.balance(), 50.0);
    assert!(!account.has_overdraft());
}

#[test]
fn withdraw_with_overdraft_test() {
    let mut account = open_account();
    account.deposit(100.0).unwrap();

    assert_eq!(account.withdraw(150.0), Ok(Withdrawal::Overdraft));
    assert_eq!(account.balance(), -50.0);
    assert!(account.has_overdraft());

    // No more overdrafts allowed.
    assert!(account.withdraw(100.0).is_err());
    assert_eq!(account.balance(), -50.0);
}

#[test]
fn overdraft_is_never_granted_twice_test() {
    let mut account = open_account();
    account.deposit(100.0).unwrap();
    account.withdraw(150.0).unwrap();

    // Back to a positive balance: ordinary withdrawals work, a second overdraft does not.
    account.deposit(250.0).unwrap();
    assert_eq!(account.balance(), 200.0);
    assert_eq!(account.withdraw(300.0), Err(AccountError::OverdraftUnavailable));
    assert_eq!(account.balance(), 200.0);
    assert_eq!(account.withdraw(200.0), Ok(Withdrawal::Ordinary));
    assert_eq!(account.balance(), 0.0);
}

#[test]
fn withdraw_rejections_test() {
    let mut closed = Account::new();
    assert_eq!(closed.withdraw(10.0), Err(AccountError::AccountClosed));

    let mut account = open_account();
    account.deposit(10.0).unwrap();
    assert_eq!(account.withdraw(0.0), Err(AccountError::InvalidAmount { amount: 0.0 }));
    assert_eq!(account.withdraw(-1.0), Err(AccountError::InvalidAmount { amount: -1.0 }));
    assert!(matches!(
        account.withdraw(f64::NAN),
        Err(AccountError::InvalidAmount { .. })
    ));
    assert_eq!(account.balance(), 10.0);
}

#[test]
fn close_account_with_zero_balance_test() {
    let mut account = open_account();
    account.deposit(100.0).unwrap();
    account.withdraw(100.0).unwrap();

    assert_eq!(account.close(), Ok(()));
    assert!(!account.is_open());

    // Closing twice fails, and a closed account can be opened again.
    assert_eq!(account.close(), Err(AccountError::AccountClosed));
    assert!(account.open());
}

#[test]
fn cannot_close_account_with_balance_test() {
    let mut account = open_account();
    account.deposit(100.0).unwrap();

    assert_eq!(account.close(), Err(AccountError::NonZeroBalance { balance: 100.0 }));
    assert!(account.is_open());
}

#[test]
fn cannot_close_overdrawn_account_test() {
    let mut account = open_account();
    account.deposit(100.0).unwrap();
    account.withdraw(150.0).unwrap();

    assert_eq!(account.close(), Err(AccountError::NonZeroBalance { balance: -50.0 }));
    assert!(account.is_open());
}

#[test]
fn has_positive_balance_test() {
    let mut account = open_account();
    account.deposit(200.0).unwrap();
    assert!(account.has_positive_balance());

    account.withdraw(200.0).unwrap();
    assert!(!account.has_positive_balance());
}

#[test]
fn overdraft_disabled_by_policy_test() {
    let mut account = Account::with_policy(OverdraftPolicy::builder().enabled(false).build());
    account.open();
    account.deposit(100.0).unwrap();

    assert_eq!(account.withdraw(150.0), Err(AccountError::OverdraftUnavailable));
    assert_eq!(account.balance(), 100.0);
    assert!(!account.has_overdraft());
}

#[test]
fn policy_from_json_test() {
    let policy: OverdraftPolicy = serde_json::from_str(r#"{"coverage": 0.9}"#).unwrap();
    assert!(policy.enabled());
    assert_eq!(policy.coverage(), 0.9);

    let policy: OverdraftPolicy = serde_json::from_str("{}").unwrap();
    assert_eq!(policy, OverdraftPolicy::default());

    let mut account = Account::with_policy(OverdraftPolicy::builder().coverage(0.9).build());
    account.open();
    account.deposit(100.0).unwrap();
    assert!(account.withdraw(150.0).is_err());
    assert_eq!(account.withdraw(105.0), Ok(Withdrawal::Overdraft));
}

#[test]
fn event_handler_sees_every_applied_event_test() {
    let handler = RecordingEventHandler::default();
    let mut account = Account::new().with_handler(handler.clone());

    account.open();
    account.open();
    account.deposit(100.0).unwrap();
    let _ = account.deposit(-1.0);
    account.withdraw(150.0).unwrap();
    let _ = account.withdraw(100.0);
    let _ = account.close();

    assert_eq!(
        handler.payloads(),
        vec![
            AccountEvent::Opened,
            AccountEvent::Deposited { amount: 100.0 },
            AccountEvent::OverdraftWithdrawn { amount: 150.0 },
        ]
    );
    assert_eq!(
        handler.status_lines(),
        vec!["Account opened successfully.", "Deposited: 100", "Withdrew with overdraft: 150"]
    );

    let events = handler.events.lock().unwrap();
    assert!(events.iter().all(|event| &event.aggregate_id == account.id()));
    assert_eq!(
        events.iter().map(|event| event.sequence_number).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn account_event_serialization_test() {
    let json = serde_json::to_value(AccountEvent::Deposited { amount: 12.5 }).unwrap();
    assert_eq!(json, serde_json::json!({ "Deposited": { "amount": 12.5 } }));

    let event: AccountEvent = serde_json::from_str(r#""Opened""#).unwrap();
    assert_eq!(event, AccountEvent::Opened);
}

#[test]
fn random_operations_keep_invariants_test() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut account = Account::new();
        let mut overdraft_used = false;

        for _ in 0..200 {
            let balance = account.balance();
            let sequence_number = *account.sequence_number();
            let amount: f64 = rng.gen_range(-50.0..300.0);

            match rng.gen_range(0..4) {
                0 => {
                    account.open();
                }
                1 => {
                    if account.close().is_ok() {
                        assert_eq!(balance, 0.0);
                    }
                }
                2 => match account.deposit(amount) {
                    Ok(()) => assert_eq!(account.balance(), balance + amount),
                    Err(_) => assert_eq!(account.balance(), balance),
                },
                _ => match account.withdraw(amount) {
                    Ok(Withdrawal::Ordinary) => {
                        assert!(balance >= amount);
                        assert_eq!(account.balance(), balance - amount);
                    }
                    Ok(Withdrawal::Overdraft) => {
                        assert!(!overdraft_used);
                        assert!(balance > amount / 2.0);
                        assert_eq!(account.balance(), balance - amount);
                        overdraft_used = true;
                    }
                    Err(_) => {
                        assert_eq!(account.balance(), balance);
                        assert_eq!(*account.sequence_number(), sequence_number);
                    }
                },
            }

            assert_eq!(account.has_overdraft(), overdraft_used);
            if account.balance() < 0.0 {
                assert!(account.has_overdraft());
            }
        }
    }
}
