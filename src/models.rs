// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Statement labels, kept from the original program.
        match self {
            TxKind::Deposit => write!(f, "Deposito"),
            TxKind::Withdrawal => write!(f, "Saque"),
        }
    }
}

/// One entry in an account's append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub kind: TxKind,
    pub amount: Decimal,
    pub at: DateTime<Local>,
}

/// Checking-account rules: a cap on the size of a single withdrawal and on
/// how many withdrawals the account may make overall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CheckingPolicy {
    pub limit: Decimal,
    pub max_withdrawals: u32,
}

impl Default for CheckingPolicy {
    fn default() -> Self {
        Self {
            limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

/// A monetary movement. Applied once against an account, then discarded;
/// only the history record it appends survives.
#[derive(Debug, Clone, Copy)]
pub struct Transaction {
    pub kind: TxKind,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(kind: TxKind, amount: Decimal) -> Self {
        Self { kind, amount }
    }

    pub fn deposit(amount: Decimal) -> Self {
        Self::new(TxKind::Deposit, amount)
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self::new(TxKind::Withdrawal, amount)
    }

    /// Runs the account operation for this kind and, only on success,
    /// appends the matching history record. A rejection leaves the account
    /// untouched and records nothing.
    pub fn apply(&self, account: &mut Account) -> Result<()> {
        match self.kind {
            TxKind::Deposit => account.deposit(self.amount)?,
            TxKind::Withdrawal => account.withdraw(self.amount)?,
        }
        account.record(self.kind, self.amount);
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub number: u32,
    pub branch: String,
    /// Tax id of the owning client. A lookup key, not an owning reference.
    pub owner: String,
    pub balance: Decimal,
    /// `Some` makes this a checking account; `None` is the plain base account.
    pub policy: Option<CheckingPolicy>,
    pub history: Vec<HistoryRecord>,
}

impl Account {
    pub fn new(number: u32, branch: String, owner: String, policy: Option<CheckingPolicy>) -> Self {
        Self {
            number,
            branch,
            owner,
            balance: Decimal::ZERO,
            policy,
            history: Vec::new(),
        }
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if let Some(policy) = &self.policy {
            if amount > policy.limit {
                return Err(LedgerError::LimitExceeded);
            }
            if self.withdrawal_count() >= policy.max_withdrawals as usize {
                return Err(LedgerError::WithdrawalsExhausted);
            }
        }
        // The funds check runs before the sign check, matching the original
        // program's ordering.
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds);
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance -= amount;
        Ok(())
    }

    /// Successful withdrawals so far, counted from the history log.
    pub fn withdrawal_count(&self) -> usize {
        self.history
            .iter()
            .filter(|r| r.kind == TxKind::Withdrawal)
            .count()
    }

    fn record(&mut self, kind: TxKind, amount: Decimal) {
        self.history.push(HistoryRecord {
            kind,
            amount,
            at: Local::now(),
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub tax_id: String,
    pub name: String,
    pub birth_date: String,
    pub address: String,
    /// Numbers of the accounts this client owns, in creation order.
    pub accounts: Vec<u32>,
}

impl Client {
    pub fn new(tax_id: String, name: String, birth_date: String, address: String) -> Self {
        Self {
            tax_id,
            name,
            birth_date,
            address,
            accounts: Vec::new(),
        }
    }

    /// The client is the nominal initiator; the transaction does the work.
    pub fn apply_transaction(&self, account: &mut Account, tx: &Transaction) -> Result<()> {
        tx.apply(account)
    }

    pub fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Only the first account is ever reachable through the menu.
    pub fn primary_account(&self) -> Option<u32> {
        self.accounts.first().copied()
    }
}
