//! Transfer handler.
//!
//! A single `Transfer` serves plain transfers and bridge settlement: a bridge
//! sender gets the amount minted before the debit, a bridge recipient gets
//! it burned after the credit and after its payment hook has returned. Every
//! supply change is paired with a balance change of the same size inside the
//! same transaction, so the supply keeps matching the sum of balances.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, Event, Int128, MessageInfo,
    Response, StdError, Storage, SubMsg, Uint128,
};
use cw20::Cw20ReceiveMsg;

use super::bridge::is_bridge;
use crate::auth::{is_self_or_witnessed, validate_handle};
use crate::error::ContractError;
use crate::ledger::{adjust_balance, adjust_supply, Delta};
use crate::state::{PendingBurn, BURN_REPLY_ID, PENDING_BURNS};

/// Execute handler for `Transfer`.
pub fn execute_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    from: String,
    to: Option<String>,
    amount: Int128,
    data: Option<Binary>,
) -> Result<Response, ContractError> {
    let from = validate_handle(deps.api, "from", &from)?;
    let to = to
        .map(|to| validate_handle(deps.api, "to", &to))
        .transpose()?;
    let amount = Uint128::try_from(amount).map_err(|_| ContractError::InvalidArgument {
        reason: format!("the amount {} is negative", amount),
    })?;

    if !is_self_or_witnessed(deps.storage, &env, &info, &from)? {
        return Err(ContractError::Unauthorized);
    }

    let response = Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", from.to_string())
        .add_attribute("amount", amount)
        .set_data(to_json_binary(&true)?);

    // Nothing moves, but the recipient is still notified
    if amount.is_zero() || to.as_ref() == Some(&from) {
        let mut response = response.add_event(transfer_event(Some(&from), to.as_ref(), amount));
        if let Some(to) = &to {
            if let Some(hook) = payment_hook(deps.as_ref(), &from, to, amount, data)? {
                response = response.add_message(hook);
            }
        }
        return Ok(response);
    }

    let to = to.ok_or_else(|| ContractError::InvalidArgument {
        reason: "a non-zero transfer needs a recipient".to_string(),
    })?;
    let mut response = response.add_attribute("to", to.to_string());

    if is_bridge(deps.storage, &from) {
        response = response.add_event(mint(deps.storage, &from, amount)?);
    }

    adjust_balance(deps.storage, &from, Delta::Decrease(amount))?;
    adjust_balance(deps.storage, &to, Delta::Increase(amount))?;

    response = response.add_event(transfer_event(Some(&from), Some(&to), amount));
    let hook = payment_hook(deps.as_ref(), &from, &to, amount, data)?;

    match (is_bridge(deps.storage, &to), hook) {
        // The hook must see the credited balance, so the burn waits for its reply
        (true, Some(hook)) => {
            let mut pending = PENDING_BURNS.may_load(deps.storage)?.unwrap_or_default();
            pending.push(PendingBurn {
                bridge: to,
                amount,
            });
            PENDING_BURNS.save(deps.storage, &pending)?;
            response = response.add_submessage(SubMsg::reply_on_success(hook, BURN_REPLY_ID));
        }
        (true, None) => {
            response = response.add_event(burn(deps.storage, &to, amount)?);
        }
        (false, Some(hook)) => {
            response = response.add_message(hook);
        }
        (false, None) => {}
    }

    Ok(response)
}

/// Reply handler for a bridge recipient's hook: burn what it was credited.
pub fn reply_pending_burn(deps: DepsMut) -> Result<Response, ContractError> {
    let mut pending = PENDING_BURNS.may_load(deps.storage)?.unwrap_or_default();
    let PendingBurn { bridge, amount } = pending
        .pop()
        .ok_or_else(|| StdError::not_found("PendingBurn"))?;

    if pending.is_empty() {
        PENDING_BURNS.remove(deps.storage);
    } else {
        PENDING_BURNS.save(deps.storage, &pending)?;
    }

    let event = burn(deps.storage, &bridge, amount)?;

    Ok(Response::new()
        .add_attribute("method", "burn")
        .add_attribute("bridge", bridge)
        .add_attribute("amount", amount)
        .add_event(event)
        .set_data(to_json_binary(&true)?))
}

/// Transfer event; mints omit `from` and burns omit `to`.
fn transfer_event(from: Option<&Addr>, to: Option<&Addr>, amount: Uint128) -> Event {
    let mut event = Event::new("transfer");
    if let Some(from) = from {
        event = event.add_attribute("from", from.to_string());
    }
    if let Some(to) = to {
        event = event.add_attribute("to", to.to_string());
    }
    event.add_attribute("amount", amount)
}

/// `Cw20ReceiveMsg` for a contract recipient, `None` for a plain account.
///
/// A contract that cannot decode the hook fails it, and with it the whole
/// transfer. This contract is one of them.
fn payment_hook(
    deps: Deps,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
    data: Option<Binary>,
) -> Result<Option<CosmosMsg>, ContractError> {
    if !is_contract(deps, to) {
        return Ok(None);
    }

    let hook: CosmosMsg = Cw20ReceiveMsg {
        sender: from.to_string(),
        amount,
        msg: data.unwrap_or_default(),
    }
    .into_cosmos_msg(to.to_string())?;
    Ok(Some(hook))
}

fn is_contract(deps: Deps, address: &Addr) -> bool {
    deps.querier
        .query_wasm_contract_info(address.to_string())
        .is_ok()
}

/// Mint `amount` into a bridge account.
fn mint(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<Event, ContractError> {
    if !is_bridge(storage, account) {
        return Err(ContractError::Unauthorized);
    }

    adjust_supply(storage, Delta::Increase(amount))?;
    adjust_balance(storage, account, Delta::Increase(amount))?;

    Ok(transfer_event(None, Some(account), amount))
}

/// Burn `amount` from a bridge account.
fn burn(storage: &mut dyn Storage, account: &Addr, amount: Uint128) -> Result<Event, ContractError> {
    if !is_bridge(storage, account) {
        return Err(ContractError::Unauthorized);
    }

    adjust_supply(storage, Delta::Decrease(amount))?;
    adjust_balance(storage, account, Delta::Decrease(amount))?;

    Ok(transfer_event(Some(account), None, amount))
}
