//! Ownership handlers.
//!
//! This module handles:
//! - Ownership transfer (initiate/accept/cancel)
//! - Owner verification
//! - Code upgrades

use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, WasmMsg,
};

use crate::auth::{ensure_owner, is_owner_caller, is_pending_owner_caller, validate_handle};
use crate::error::ContractError;
use crate::state::{OWNER, PENDING_OWNER};

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner. A later proposal replaces an earlier one.
pub fn execute_initiate_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let new_owner = validate_handle(deps.api, "new owner", &new_owner)?;
    ensure_owner(deps.storage, &info)?;

    PENDING_OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "initiate_ownership_transfer")
        .add_attribute("pending_owner", new_owner)
        .set_data(to_json_binary(&true)?))
}

/// Accept the pending proposal.
///
/// The pending slot is left in place; it now names the current owner and is
/// replaced by the next proposal.
pub fn execute_accept_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    if !is_pending_owner_caller(deps.storage, &info)? {
        return Err(ContractError::Unauthorized);
    }

    let new_owner = PENDING_OWNER.load(deps.storage)?;
    OWNER.save(deps.storage, &new_owner)?;

    Ok(Response::new()
        .add_attribute("method", "accept_ownership_transfer")
        .add_attribute("owner", new_owner)
        .set_data(to_json_binary(&true)?))
}

/// Withdraw the pending proposal.
pub fn execute_cancel_ownership_transfer(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "cancel_ownership_transfer")
        .set_data(to_json_binary(&true)?))
}

// ============================================================================
// Verification & Upgrade
// ============================================================================

/// Report whether the sender may act as this contract. Never fails on a
/// foreign sender; the answer is in the response data.
pub fn execute_verify(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let verified = is_owner_caller(deps.storage, &info)?;

    Ok(Response::new()
        .add_attribute("method", "verify")
        .add_attribute("verified", verified.to_string())
        .set_data(to_json_binary(&verified)?))
}

/// Migrate this contract to new code. Requires the contract to be its own
/// wasm admin, otherwise the host rejects the migration and the call aborts.
pub fn execute_update(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_code_id: u64,
    msg: Binary,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let migrate: CosmosMsg = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id,
        msg,
    }
    .into();

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("method", "update")
        .add_attribute("new_code_id", new_code_id.to_string()))
}
