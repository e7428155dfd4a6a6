//! Message types for the Bridged Token contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Int128, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial owner (controls bridge registration and upgrades)
    pub owner: String,
}

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Move `amount` from `from` to `to`.
    ///
    /// Authorization: `from` itself (or the owner, when `from` is this contract)
    ///
    /// When `from` is a bridge the amount is minted into it first; when `to`
    /// is a bridge the amount is burned from it afterwards. A contract
    /// recipient receives a `Cw20ReceiveMsg` hook carrying `data`.
    Transfer {
        /// Source account
        from: String,
        /// Destination account (`None` = no recipient, only valid for no-op transfers)
        to: Option<String>,
        /// Amount in the smallest unit; negative amounts are rejected
        amount: Int128,
        /// Opaque payload forwarded to the recipient hook
        data: Option<Binary>,
    },

    // ========================================================================
    // Bridge Registry
    // ========================================================================
    /// Register a bridge account (idempotent)
    ///
    /// Authorization: Owner only
    AddBridge {
        /// Address to grant the bridge role
        address: String,
    },

    /// Unregister a bridge account
    ///
    /// Authorization: Owner only
    RemoveBridge {
        /// Address to revoke the bridge role
        address: String,
    },

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Propose a new owner (overwrites any previous proposal)
    ///
    /// Authorization: Owner only
    InitiateOwnershipTransfer {
        /// Proposed owner address
        new_owner: String,
    },

    /// Accept the pending ownership proposal
    ///
    /// Authorization: Pending owner only
    AcceptOwnershipTransfer {},

    /// Withdraw the pending ownership proposal
    ///
    /// Authorization: Owner only
    CancelOwnershipTransfer {},

    /// Replace the contract code by migrating this contract to `new_code_id`.
    /// The contract must be its own wasm admin.
    ///
    /// Authorization: Owner only
    Update {
        /// Code ID to migrate to
        new_code_id: u64,
        /// Migrate message passed to the new code
        msg: Binary,
    },

    /// Check whether the sender may act as this contract.
    /// Returns `true` in the response data for the owner, `false` otherwise.
    Verify {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the fixed ticker
    #[returns(SymbolResponse)]
    Symbol {},

    /// Returns the fixed precision
    #[returns(DecimalsResponse)]
    Decimals {},

    /// Returns the balance of an account (0 if it never held tokens)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    /// Returns name, symbol, decimals and total supply
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    #[returns(OwnerResponse)]
    Owner {},

    /// Returns the pending owner (if any)
    #[returns(PendingOwnerResponse)]
    PendingOwner {},

    #[returns(IsBridgeResponse)]
    IsBridge { address: String },

    /// Returns registered bridges, ascending by address
    #[returns(BridgesResponse)]
    Bridges {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns stored balances, ascending by address
    #[returns(AllBalancesResponse)]
    AllBalances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct SymbolResponse {
    pub symbol: String,
}

#[cw_serde]
pub struct DecimalsResponse {
    pub decimals: u8,
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct IsBridgeResponse {
    pub is_bridge: bool,
}

#[cw_serde]
pub struct BridgesResponse {
    pub bridges: Vec<Addr>,
}

/// A stored balance record
#[cw_serde]
pub struct BalanceEntry {
    pub address: Addr,
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllBalancesResponse {
    pub balances: Vec<BalanceEntry>,
}
