// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

// CPF: exactly 11 digits, nothing else.
static TAX_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

pub fn valid_tax_id(s: &str) -> bool {
    TAX_ID.is_match(s)
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("R$ {:.2}", d)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<W: Write, T: serde::Serialize>(
    out: &mut W,
    json_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    Ok(false)
}

/// Writes the prompt, then reads one trimmed line. `None` means end of input.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, msg: &str) -> Result<Option<String>> {
    write!(out, "{}", msg)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Re-prompts until a strictly positive decimal is entered. `None` means the
/// input ended before a usable value arrived.
pub fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    msg: &str,
) -> Result<Option<Decimal>> {
    loop {
        let Some(raw) = prompt(input, out, msg)? else {
            return Ok(None);
        };
        match raw.parse::<Decimal>() {
            Ok(v) if v > Decimal::ZERO => return Ok(Some(v)),
            Ok(_) => writeln!(out, "\n@@@ O valor deve ser positivo! @@@")?,
            Err(_) => writeln!(out, "\n@@@ Valor inválido! Digite um número. @@@")?,
        }
    }
}
