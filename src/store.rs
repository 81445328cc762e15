// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{LedgerError, Result};
use crate::models::{Account, CheckingPolicy, Client, Transaction};
use crate::utils::valid_tax_id;

/// Process-scoped store. Starts empty, lives for one run, and is handed to
/// every command; nothing is persisted.
pub struct Bank {
    branch: String,
    policy: CheckingPolicy,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new("0001".to_string(), CheckingPolicy::default())
    }
}

impl Bank {
    /// `branch` is stamped on every account; `policy` is the checking policy
    /// given to accounts opened through [`Bank::open_account`].
    pub fn new(branch: String, policy: CheckingPolicy) -> Self {
        Self {
            branch,
            policy,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.tax_id == tax_id)
    }

    fn client_index(&self, tax_id: &str) -> Option<usize> {
        self.clients.iter().position(|c| c.tax_id == tax_id)
    }

    /// Registers a client. The tax id must be exactly 11 digits and unused.
    pub fn add_client(&mut self, client: Client) -> Result<()> {
        if !valid_tax_id(&client.tax_id) {
            return Err(LedgerError::InvalidTaxId);
        }
        if self.find_client(&client.tax_id).is_some() {
            return Err(LedgerError::DuplicateTaxId);
        }
        self.clients.push(client);
        Ok(())
    }

    /// Opens a checking account for an existing client and returns its
    /// number. Numbers run sequentially from 1 and are never reused.
    pub fn open_account(&mut self, tax_id: &str) -> Result<u32> {
        let idx = self
            .client_index(tax_id)
            .ok_or(LedgerError::ClientNotFound)?;
        let number = self.accounts.len() as u32 + 1;
        self.accounts.push(Account::new(
            number,
            self.branch.clone(),
            tax_id.to_string(),
            Some(self.policy),
        ));
        self.clients[idx].add_account(number);
        Ok(number)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// The client's first account, which is the only one the menu operates on.
    pub fn primary_account(&self, tax_id: &str) -> Result<&Account> {
        let client = self
            .find_client(tax_id)
            .ok_or(LedgerError::ClientNotFound)?;
        let number = client.primary_account().ok_or(LedgerError::AccountNotFound)?;
        self.account(number).ok_or(LedgerError::AccountNotFound)
    }

    /// Resolves the client and their primary account, then lets the client
    /// apply the transaction to it.
    pub fn apply(&mut self, tax_id: &str, tx: &Transaction) -> Result<()> {
        let client_idx = self
            .client_index(tax_id)
            .ok_or(LedgerError::ClientNotFound)?;
        let number = self.clients[client_idx]
            .primary_account()
            .ok_or(LedgerError::AccountNotFound)?;
        let account_idx = self
            .accounts
            .iter()
            .position(|a| a.number == number)
            .ok_or(LedgerError::AccountNotFound)?;

        let client = &self.clients[client_idx];
        let account = &mut self.accounts[account_idx];
        client.apply_transaction(account, tx)
    }
}
