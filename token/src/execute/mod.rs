//! Execute handlers for the Bridged Token contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `transfer` - Transfer with bridge-triggered mint and burn
//! - `bridge` - Bridge registry management
//! - `ownership` - Two-phase ownership handoff, verification and upgrades

mod bridge;
mod ownership;
mod transfer;

pub use bridge::*;
pub use ownership::*;
pub use transfer::*;
