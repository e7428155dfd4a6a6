//! Balance Ledger
//!
//! Owns per-account balances and the total supply. `adjust_balance` is the
//! only way a balance changes and `adjust_supply` the only way the supply
//! changes; callers pair them so that the supply always equals the sum of
//! all stored balances.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, TOTAL_SUPPLY};

/// Signed change applied to a balance or to the supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta {
    Increase(Uint128),
    Decrease(Uint128),
}

/// Stored balance of `account`, zero if it has no record.
pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

/// Apply `delta` to the balance of `account` and return the new balance.
///
/// A balance that reaches zero is removed rather than stored as zero.
pub fn adjust_balance(
    storage: &mut dyn Storage,
    account: &Addr,
    delta: Delta,
) -> Result<Uint128, ContractError> {
    let balance = balance_of(storage, account)?;
    let updated = match delta {
        Delta::Increase(amount) => balance.checked_add(amount)?,
        Delta::Decrease(amount) => {
            balance
                .checked_sub(amount)
                .map_err(|_| ContractError::InsufficientBalance {
                    account: account.to_string(),
                    balance,
                    required: amount,
                })?
        }
    };

    if updated.is_zero() {
        BALANCES.remove(storage, account);
    } else {
        BALANCES.save(storage, account, &updated)?;
    }
    Ok(updated)
}

/// Apply `delta` to the total supply and return the new supply.
pub fn adjust_supply(storage: &mut dyn Storage, delta: Delta) -> Result<Uint128, ContractError> {
    let supply = total_supply(storage)?;
    let updated = match delta {
        Delta::Increase(amount) => supply.checked_add(amount)?,
        Delta::Decrease(amount) => {
            supply
                .checked_sub(amount)
                .map_err(|_| ContractError::NegativeSupply {
                    supply,
                    required: amount,
                })?
        }
    };

    TOTAL_SUPPLY.save(storage, &updated)?;
    Ok(updated)
}
