use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::events;
use crate::storage;
use crate::types::AllowanceValue;

pub const NAME: &str = "Star Token";
pub const SYMBOL: &str = "STAR";
pub const DECIMALS: u32 = 18;

fn check_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

fn receive_balance(env: &Env, id: &Address, amount: i128) {
    let balance = storage::get_balance(env, id);
    storage::set_balance(env, id, balance + amount);
}

fn spend_balance(env: &Env, id: &Address, amount: i128) -> Result<(), Error> {
    let balance = storage::get_balance(env, id);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    storage::set_balance(env, id, balance - amount);
    Ok(())
}

/// Credit `to` with freshly issued tokens
pub fn mint(env: &Env, to: &Address, amount: i128) {
    receive_balance(env, to, amount);
    storage::set_total_supply(env, storage::get_total_supply(env) + amount);
    events::emit_mint(env, to, amount);
}

/// Destroy tokens held by `from`
/// Fails without touching supply if `from` holds less than `amount`
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    spend_balance(env, from, amount)?;
    storage::set_total_supply(env, storage::get_total_supply(env) - amount);
    events::emit_burn(env, from, amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    check_nonnegative_amount(amount)?;
    spend_balance(env, from, amount)?;
    receive_balance(env, to, amount);
    events::emit_transfer(env, from, to, amount);
    Ok(())
}

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), Error> {
    check_nonnegative_amount(amount)?;
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(Error::InvalidExpiration);
    }

    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    storage::set_allowance(env, from, spender, &allowance);
    events::emit_approve(env, from, spender, amount, expiration_ledger);
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowance = storage::get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(Error::InsufficientAllowance);
    }
    if amount > 0 {
        let remaining = AllowanceValue {
            amount: allowance.amount - amount,
            expiration_ledger: allowance.expiration_ledger,
        };
        storage::set_allowance(env, from, spender, &remaining);
    }
    Ok(())
}
