// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::error::LedgerError;
use crate::models::Client;
use crate::store::Bank;
use crate::utils::{prompt, valid_tax_id};

/// `nu`: registers a new client. The tax id is validated and dedup-checked
/// before any further prompting.
pub fn create<R: BufRead, W: Write>(bank: &mut Bank, input: &mut R, out: &mut W) -> Result<()> {
    let Some(tax_id) = prompt(input, out, "Informe o CPF (somente número): ")? else {
        return Ok(());
    };
    if !valid_tax_id(&tax_id) {
        writeln!(out, "\n@@@ {} @@@", LedgerError::InvalidTaxId)?;
        return Ok(());
    }
    if bank.find_client(&tax_id).is_some() {
        writeln!(out, "\n@@@ {} @@@", LedgerError::DuplicateTaxId)?;
        return Ok(());
    }

    let Some(name) = prompt(input, out, "Informe o nome completo: ")? else {
        return Ok(());
    };
    let Some(birth_date) = prompt(input, out, "Informe a data de nascimento (dd-mm-aaaa): ")?
    else {
        return Ok(());
    };
    let Some(address) = prompt(
        input,
        out,
        "Informe o endereço (logradouro, nro - bairro - cidade/sigla estado): ",
    )?
    else {
        return Ok(());
    };

    match bank.add_client(Client::new(tax_id, name, birth_date, address)) {
        Ok(()) => writeln!(out, "\n=== Cliente criado com sucesso! ===")?,
        Err(e) => writeln!(out, "\n@@@ {} @@@", e)?,
    }
    Ok(())
}
