// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod error;
pub mod models;
pub mod store;
pub mod menu;
pub mod utils;
pub mod commands;
