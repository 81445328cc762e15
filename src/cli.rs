// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("cofrinho")
        .version(crate_version!())
        .about("Interactive bank ledger with checking-account withdrawal rules")
        .arg(
            Arg::new("branch")
                .long("branch")
                .value_name("CODE")
                .default_value("0001")
                .help("Branch code stamped on new accounts"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("AMOUNT")
                .default_value("500")
                .help("Per-withdrawal limit for new accounts"),
        )
        .arg(
            Arg::new("max-withdrawals")
                .long("max-withdrawals")
                .value_name("N")
                .default_value("3")
                .value_parser(clap::value_parser!(u32))
                .help("Withdrawals allowed per account"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the account listing as JSON"),
        )
}
