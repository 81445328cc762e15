// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;

use anyhow::Result;

use cofrinho::models::CheckingPolicy;
use cofrinho::store::Bank;
use cofrinho::{cli, menu, utils};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let branch = matches.get_one::<String>("branch").unwrap().clone();
    let limit = utils::parse_decimal(matches.get_one::<String>("limit").unwrap())?;
    let max_withdrawals = *matches.get_one::<u32>("max-withdrawals").unwrap();
    let json = matches.get_flag("json");

    let mut bank = Bank::new(
        branch,
        CheckingPolicy {
            limit,
            max_withdrawals,
        },
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    menu::run(&mut bank, &mut input, &mut out, json)
}
