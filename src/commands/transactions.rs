// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::LedgerError;
use crate::models::{Transaction, TxKind};
use crate::store::Bank;
use crate::utils::{fmt_money, prompt, prompt_amount};

/// `d`: deposit into the client's primary account.
pub fn deposit<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    transact(bank, input, out, TxKind::Deposit)
}

/// `s`: withdraw from the client's primary account.
pub fn withdraw<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    transact(bank, input, out, TxKind::Withdrawal)
}

fn transact<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    out: &mut W,
    kind: TxKind,
) -> Result<()> {
    let Some(tax_id) = prompt(input, out, "Informe o CPF do cliente: ")? else {
        return Ok(());
    };
    // The client check comes before the amount prompt, the account check after.
    if bank.find_client(&tax_id).is_none() {
        writeln!(out, "\n@@@ {} @@@", LedgerError::ClientNotFound)?;
        return Ok(());
    }

    let value_prompt = match kind {
        TxKind::Deposit => "Informe o valor do depósito: ",
        TxKind::Withdrawal => "Informe o valor do saque: ",
    };
    let Some(amount) = prompt_amount(input, out, value_prompt)? else {
        return Ok(());
    };

    match bank.apply(&tax_id, &Transaction::new(kind, amount)) {
        Ok(()) => {
            let banner = match kind {
                TxKind::Deposit => "Depósito realizado com sucesso!",
                TxKind::Withdrawal => "Saque realizado com sucesso!",
            };
            writeln!(out, "\n=== {} ===", banner)?;
        }
        Err(e @ (LedgerError::ClientNotFound | LedgerError::AccountNotFound)) => {
            writeln!(out, "\n@@@ {} @@@", e)?;
        }
        Err(e) => writeln!(out, "\n@@@ Operação falhou! {} @@@", e)?,
    }
    Ok(())
}

/// `e`: prints the statement for the client's primary account.
pub fn statement<R: BufRead, W: Write>(bank: &Bank, input: &mut R, out: &mut W) -> Result<()> {
    let Some(tax_id) = prompt(input, out, "Informe o CPF do cliente: ")? else {
        return Ok(());
    };
    let account = match bank.primary_account(&tax_id) {
        Ok(a) => a,
        Err(e) => {
            writeln!(out, "\n@@@ {} @@@", e)?;
            return Ok(());
        }
    };

    writeln!(out, "\n================ EXTRATO ================")?;
    if account.history.is_empty() {
        writeln!(out, "Não foram realizadas movimentações.")?;
    } else {
        for rec in &account.history {
            writeln!(out, "\n{}:\n\t{}", rec.kind, fmt_money(&rec.amount))?;
        }
    }
    writeln!(out, "\nSaldo:\n\t{}", fmt_money(&account.balance))?;
    writeln!(out, "==========================================")?;
    Ok(())
}
