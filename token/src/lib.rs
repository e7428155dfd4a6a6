//! Bridged Token - Fungible Token Ledger with Bridge Mint/Burn
//!
//! This contract tracks balances and total supply of a single fungible token.
//! Registered bridge accounts mint and burn supply as a side effect of
//! ordinary transfers.
//!
//! # Inbound Flow (Mint)
//! 1. A bridge calls `Transfer` with itself as `from`
//! 2. The amount is minted into the bridge account
//! 3. The freshly minted amount moves to the recipient in the same call
//!
//! # Outbound Flow (Burn)
//! 1. A holder calls `Transfer` with a bridge as `to`
//! 2. The amount moves to the bridge account
//! 3. A contract bridge receives its payment hook while still holding the amount
//! 4. The bridge's balance is burned in the same transaction
//!
//! # Security
//! - Total supply always equals the sum of all balances
//! - Every failure aborts the whole call
//! - Two-phase ownership handoff (initiate/accept)
//! - Owner-gated bridge registry and code upgrades

pub mod auth;
pub mod contract;
pub mod error;
mod execute;
pub mod ledger;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::ledger::Delta;
