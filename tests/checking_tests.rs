// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cofrinho::error::LedgerError;
use cofrinho::models::{Account, CheckingPolicy, Transaction};
use rust_decimal_macros::dec;

fn checking_with_balance(balance: rust_decimal::Decimal) -> Account {
    let mut acc = Account::new(
        1,
        "0001".to_string(),
        "12345678901".to_string(),
        Some(CheckingPolicy::default()),
    );
    acc.deposit(balance).unwrap();
    acc
}

#[test]
fn three_withdrawals_then_count_exhausted() {
    let mut acc = checking_with_balance(dec!(1000));
    for _ in 0..3 {
        Transaction::withdrawal(dec!(100)).apply(&mut acc).unwrap();
    }
    assert_eq!(acc.balance, dec!(700));
    assert_eq!(acc.withdrawal_count(), 3);

    let err = Transaction::withdrawal(dec!(10)).apply(&mut acc).unwrap_err();
    assert_eq!(err, LedgerError::WithdrawalsExhausted);
    assert_eq!(acc.balance, dec!(700));
    assert_eq!(acc.history.len(), 3);
}

#[test]
fn withdrawal_over_limit_is_rejected() {
    let mut acc = checking_with_balance(dec!(1000));
    let err = Transaction::withdrawal(dec!(600)).apply(&mut acc).unwrap_err();
    assert_eq!(err, LedgerError::LimitExceeded);
    assert_eq!(acc.balance, dec!(1000));
    assert!(acc.history.is_empty());
}

#[test]
fn limit_check_runs_before_count_check() {
    let mut acc = checking_with_balance(dec!(10000));
    for _ in 0..3 {
        Transaction::withdrawal(dec!(100)).apply(&mut acc).unwrap();
    }
    // Both rules are violated; the limit message wins.
    let err = acc.withdraw(dec!(600)).unwrap_err();
    assert_eq!(err, LedgerError::LimitExceeded);
}

#[test]
fn failed_withdrawals_do_not_consume_the_count() {
    let mut acc = checking_with_balance(dec!(100));
    for _ in 0..5 {
        let err = Transaction::withdrawal(dec!(200)).apply(&mut acc).unwrap_err();
        assert_eq!(err, LedgerError::InsufficientFunds);
    }
    assert_eq!(acc.withdrawal_count(), 0);
    Transaction::withdrawal(dec!(100)).apply(&mut acc).unwrap();
    assert_eq!(acc.balance, dec!(0));
}

#[test]
fn deposit_then_oversized_withdrawal_keeps_one_record() {
    let mut acc = Account::new(
        7,
        "0001".to_string(),
        "12345678901".to_string(),
        Some(CheckingPolicy {
            limit: dec!(5000),
            max_withdrawals: 3,
        }),
    );
    Transaction::deposit(dec!(50)).apply(&mut acc).unwrap();
    let err = Transaction::withdrawal(dec!(1000)).apply(&mut acc).unwrap_err();
    assert_eq!(err, LedgerError::InsufficientFunds);
    assert_eq!(acc.balance, dec!(50));
    assert_eq!(acc.history.len(), 1);
}

#[test]
fn custom_policy_is_honored() {
    let mut acc = Account::new(
        2,
        "0001".to_string(),
        "12345678901".to_string(),
        Some(CheckingPolicy {
            limit: dec!(50),
            max_withdrawals: 1,
        }),
    );
    acc.deposit(dec!(200)).unwrap();
    assert_eq!(acc.withdraw(dec!(51)).unwrap_err(), LedgerError::LimitExceeded);
    Transaction::withdrawal(dec!(50)).apply(&mut acc).unwrap();
    let err = Transaction::withdrawal(dec!(10)).apply(&mut acc).unwrap_err();
    assert_eq!(err, LedgerError::WithdrawalsExhausted);
}
