//! Bridged Token Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers and the burn reply
//! - `query` - Query message handlers
//! - `ledger` - Balance and supply primitives
//! - `auth` - Authorization predicates

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::auth::validate_handle;
use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership_transfer, execute_add_bridge, execute_cancel_ownership_transfer,
    execute_initiate_ownership_transfer, execute_remove_bridge, execute_transfer, execute_update,
    execute_verify, reply_pending_burn,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_all_balances, query_balance, query_bridges, query_decimals, query_is_bridge,
    query_owner, query_pending_owner, query_symbol, query_token_info, query_total_supply,
};
use crate::state::{BURN_REPLY_ID, CONTRACT_NAME, CONTRACT_VERSION, OWNER};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = validate_handle(deps.api, "owner", &msg.owner)?;
    OWNER.save(deps.storage, &owner)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Transfer {
            from,
            to,
            amount,
            data,
        } => execute_transfer(deps, env, info, from, to, amount, data),

        // Bridge registry
        ExecuteMsg::AddBridge { address } => execute_add_bridge(deps, info, address),
        ExecuteMsg::RemoveBridge { address } => execute_remove_bridge(deps, info, address),

        // Ownership
        ExecuteMsg::InitiateOwnershipTransfer { new_owner } => {
            execute_initiate_ownership_transfer(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnershipTransfer {} => execute_accept_ownership_transfer(deps, info),
        ExecuteMsg::CancelOwnershipTransfer {} => execute_cancel_ownership_transfer(deps, info),
        ExecuteMsg::Update { new_code_id, msg } => {
            execute_update(deps, env, info, new_code_id, msg)
        }
        ExecuteMsg::Verify {} => execute_verify(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Token queries
        QueryMsg::Symbol {} => to_json_binary(&query_symbol()),
        QueryMsg::Decimals {} => to_json_binary(&query_decimals()),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TotalSupply {} => to_json_binary(&query_total_supply(deps)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),

        // Ownership queries
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),

        // Bridge registry queries
        QueryMsg::IsBridge { address } => to_json_binary(&query_is_bridge(deps, address)?),
        QueryMsg::Bridges { start_after, limit } => {
            to_json_binary(&query_bridges(deps, start_after, limit)?)
        }

        // Enumeration queries
        QueryMsg::AllBalances { start_after, limit } => {
            to_json_binary(&query_all_balances(deps, start_after, limit)?)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        BURN_REPLY_ID => reply_pending_burn(deps),
        id => Err(StdError::generic_err(format!("Unknown reply id: {}", id)).into()),
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Code upgrade. Owner, balances, supply and bridges carry over untouched.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
