//! Authorization predicates.
//!
//! The host authenticates the sender of every message, so a caller
//! "witnesses" an account exactly when it is the message sender. A contract
//! calling this ledger is the sender of its own sub-message, which covers the
//! case of a contract moving its own funds. The ledger's own account is
//! witnessed through the owner.

use cosmwasm_std::{Addr, Api, Env, MessageInfo, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{OWNER, PENDING_OWNER};

/// Validate a user supplied account handle.
pub fn validate_handle(api: &dyn Api, field: &str, value: &str) -> Result<Addr, ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidArgument {
            reason: format!("the {} address is empty", field),
        });
    }
    api.addr_validate(value)
        .map_err(|e| ContractError::InvalidArgument {
            reason: format!("the {} address is invalid: {}", field, e),
        })
}

pub fn is_owner_caller(storage: &dyn Storage, info: &MessageInfo) -> StdResult<bool> {
    let owner = OWNER.load(storage)?;
    Ok(info.sender == owner)
}

/// False when no proposal is pending.
pub fn is_pending_owner_caller(storage: &dyn Storage, info: &MessageInfo) -> StdResult<bool> {
    let pending = PENDING_OWNER.may_load(storage)?;
    Ok(pending.map_or(false, |pending| info.sender == pending))
}

/// True if the sender may move funds held by `account`.
pub fn is_self_or_witnessed(
    storage: &dyn Storage,
    env: &Env,
    info: &MessageInfo,
    account: &Addr,
) -> StdResult<bool> {
    if info.sender == *account {
        return Ok(true);
    }
    if *account == env.contract.address {
        return is_owner_caller(storage, info);
    }
    Ok(false)
}

pub fn ensure_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    if !is_owner_caller(storage, info)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
