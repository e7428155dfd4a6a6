//! Error types for the Bridged Token contract
//!
//! Every variant aborts the whole call. The display string starts with the
//! error category so that the host log tells failure causes apart.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Argument Errors
    // ========================================================================

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: no authorization")]
    Unauthorized,

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient balance: {account} holds {balance}, requested {required}")]
    InsufficientBalance {
        account: String,
        balance: Uint128,
        required: Uint128,
    },

    #[error("Negative supply: supply is {supply}, requested {required}")]
    NegativeSupply { supply: Uint128, required: Uint128 },

    // ========================================================================
    // Bridge Registry Errors
    // ========================================================================

    #[error("Not a bridge: {address}")]
    NotABridge { address: String },
}
