// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::commands;
use crate::store::Bank;
use crate::utils::prompt;

pub const MENU: &str = "\n================ MENU ================\n\
[d]\tDepositar\n\
[s]\tSacar\n\
[e]\tExtrato\n\
[nc]\tNova conta\n\
[lc]\tListar contas\n\
[nu]\tNovo usuário\n\
[q]\tSair\n\
=> ";

/// Reads menu options until `q` or end of input. Every command failure is
/// reported inline and the menu comes back; only I/O errors abort the loop.
pub fn run<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    loop {
        let Some(option) = prompt(input, out, MENU)? else {
            break;
        };
        match option.as_str() {
            "d" => commands::transactions::deposit(bank, input, out)?,
            "s" => commands::transactions::withdraw(bank, input, out)?,
            "e" => commands::transactions::statement(bank, input, out)?,
            "nu" => commands::clients::create(bank, input, out)?,
            "nc" => commands::accounts::create(bank, input, out)?,
            "lc" => commands::accounts::list(bank, out, json)?,
            "q" => break,
            _ => writeln!(
                out,
                "\n@@@ Operação inválida, por favor selecione novamente a operação desejada. @@@"
            )?,
        }
    }
    Ok(())
}
