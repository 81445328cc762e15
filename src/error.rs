// Copyright (c) 2025 cofrinho contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Domain rejections. Each variant carries its user-facing message; the
/// command layer decides the surrounding banner.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Você não tem saldo suficiente.")]
    InsufficientFunds,

    #[error("O valor informado é inválido.")]
    InvalidAmount,

    #[error("O valor do saque excede o limite.")]
    LimitExceeded,

    #[error("Número máximo de saques excedido.")]
    WithdrawalsExhausted,

    #[error("Cliente não encontrado!")]
    ClientNotFound,

    #[error("Cliente não possui conta!")]
    AccountNotFound,

    #[error("Já existe cliente com esse CPF!")]
    DuplicateTaxId,

    #[error("CPF inválido! Deve conter exatamente 11 dígitos numéricos.")]
    InvalidTaxId,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
