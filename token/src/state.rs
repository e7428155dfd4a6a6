//! State definitions for the Bridged Token contract
//!
//! Balances, bridge membership and contract metadata live under disjoint
//! storage namespaces, so keys of one category never collide with another.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridged-token";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const TOKEN_NAME: &str = "Bridged Token";

/// Fixed ticker
pub const TOKEN_SYMBOL: &str = "BRDG";

/// Fixed precision
pub const TOKEN_DECIMALS: u8 = 8;

/// Default page size for enumeration queries
pub const DEFAULT_LIMIT: u32 = 10;

/// Maximum page size for enumeration queries
pub const MAX_LIMIT: u32 = 30;

/// Reply id of a bridge recipient's hook; the burn runs in the reply
pub const BURN_REPLY_ID: u64 = 1;

// ============================================================================
// Contract Metadata
// ============================================================================

/// Administrative principal
pub const OWNER: Item<Addr> = Item::new("owner");

/// Proposed successor of the owner (if any)
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Total supply; absent until the first mint
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

// ============================================================================
// Balances
// ============================================================================

/// Key: account, Value: balance (never zero; zero balances are removed)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balance");

// ============================================================================
// Bridge Registry
// ============================================================================

/// Key: bridge address, Value: always true (absent = not a bridge)
pub const BRIDGES: Map<&Addr, bool> = Map::new("bridge");

/// Burn owed by a bridge recipient once its hook has returned
#[cw_serde]
pub struct PendingBurn {
    pub bridge: Addr,
    pub amount: Uint128,
}

/// Stack of burns waiting for their hook; a hook that transfers back into
/// this contract pushes and pops its own entry before the outer reply runs
pub const PENDING_BURNS: Item<Vec<PendingBurn>> = Item::new("pending_burns");
