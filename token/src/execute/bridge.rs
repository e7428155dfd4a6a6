//! Bridge registry handlers.
//!
//! Bridge membership is a plain set: a key under the `bridge` namespace
//! marks the address as a bridge.

use cosmwasm_std::{to_json_binary, Addr, DepsMut, MessageInfo, Response, Storage};

use crate::auth::{ensure_owner, validate_handle};
use crate::error::ContractError;
use crate::state::BRIDGES;

pub fn is_bridge(storage: &dyn Storage, address: &Addr) -> bool {
    BRIDGES.has(storage, address)
}

/// Register a bridge. Re-adding an existing bridge succeeds without change.
pub fn execute_add_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let address = validate_handle(deps.api, "bridge", &address)?;
    ensure_owner(deps.storage, &info)?;

    BRIDGES.save(deps.storage, &address, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_bridge")
        .add_attribute("bridge", address)
        .set_data(to_json_binary(&true)?))
}

/// Unregister a bridge.
pub fn execute_remove_bridge(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let address = validate_handle(deps.api, "bridge", &address)?;
    ensure_owner(deps.storage, &info)?;

    if !is_bridge(deps.storage, &address) {
        return Err(ContractError::NotABridge {
            address: address.to_string(),
        });
    }

    BRIDGES.remove(deps.storage, &address);

    Ok(Response::new()
        .add_attribute("method", "remove_bridge")
        .add_attribute("bridge", address)
        .set_data(to_json_binary(&true)?))
}
