//! Query handlers for the Bridged Token contract.

use cosmwasm_std::{Addr, Deps, Order, StdResult};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_storage_plus::Bound;

use crate::execute::is_bridge;
use crate::ledger::{balance_of, total_supply};
use crate::msg::{
    AllBalancesResponse, BalanceEntry, BridgesResponse, DecimalsResponse, IsBridgeResponse,
    OwnerResponse, PendingOwnerResponse, SymbolResponse, TotalSupplyResponse,
};
use crate::state::{
    BALANCES, BRIDGES, DEFAULT_LIMIT, MAX_LIMIT, OWNER, PENDING_OWNER, TOKEN_DECIMALS, TOKEN_NAME,
    TOKEN_SYMBOL,
};

// ============================================================================
// Token Queries
// ============================================================================

pub fn query_symbol() -> SymbolResponse {
    SymbolResponse {
        symbol: TOKEN_SYMBOL.to_string(),
    }
}

pub fn query_decimals() -> DecimalsResponse {
    DecimalsResponse {
        decimals: TOKEN_DECIMALS,
    }
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = balance_of(deps.storage, &address)?;
    Ok(BalanceResponse { balance })
}

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    Ok(TotalSupplyResponse {
        total_supply: total_supply(deps.storage)?,
    })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    Ok(TokenInfoResponse {
        name: TOKEN_NAME.to_string(),
        symbol: TOKEN_SYMBOL.to_string(),
        decimals: TOKEN_DECIMALS,
        total_supply: total_supply(deps.storage)?,
    })
}

// ============================================================================
// Ownership Queries
// ============================================================================

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.load(deps.storage)?,
    })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<PendingOwnerResponse> {
    Ok(PendingOwnerResponse {
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

// ============================================================================
// Bridge Registry Queries
// ============================================================================

pub fn query_is_bridge(deps: Deps, address: String) -> StdResult<IsBridgeResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsBridgeResponse {
        is_bridge: is_bridge(deps.storage, &address),
    })
}

/// Query paginated list of bridges.
pub fn query_bridges(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BridgesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start.as_ref().map(Bound::exclusive);

    let bridges = BRIDGES
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<Addr>>>()?;

    Ok(BridgesResponse { bridges })
}

// ============================================================================
// Enumeration Queries (full state audit)
// ============================================================================

/// Query paginated list of stored balances.
pub fn query_all_balances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllBalancesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start.as_ref().map(Bound::exclusive);

    let balances = BALANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, balance) = item?;
            Ok(BalanceEntry { address, balance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AllBalancesResponse { balances })
}
