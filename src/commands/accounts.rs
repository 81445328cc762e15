// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;

use crate::store::Bank;
use crate::utils::{maybe_print_json, pretty_table, prompt};

/// `nc`: opens a checking account for an existing client.
pub fn create<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let Some(tax_id) = prompt(input, out, "Informe o CPF do cliente: ")? else {
        return Ok(());
    };
    match bank.open_account(&tax_id) {
        Ok(_) => writeln!(out, "\n=== Conta criada com sucesso! ===")?,
        Err(_) => writeln!(
            out,
            "\n@@@ Cliente não encontrado, fluxo de criação de conta encerrado! @@@"
        )?,
    }
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub branch: String,
    pub number: u32,
    pub holder: String,
}

/// `lc`: lists every account with its holder's display name.
pub fn list<W: Write>(bank: &Bank, out: &mut W, json: bool) -> Result<()> {
    let rows: Vec<AccountRow> = bank
        .accounts()
        .iter()
        .map(|a| AccountRow {
            branch: a.branch.clone(),
            number: a.number,
            holder: bank
                .find_client(&a.owner)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        })
        .collect();

    if !maybe_print_json(out, json, &rows)? {
        let data = rows
            .iter()
            .map(|r| vec![r.branch.clone(), r.number.to_string(), r.holder.clone()])
            .collect();
        writeln!(out, "{}", pretty_table(&["Agência", "C/C", "Titular"], data))?;
    }
    Ok(())
}
