// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod clients;
pub mod transactions;
