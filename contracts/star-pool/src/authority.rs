use soroban_sdk::{contractclient, log, Address, Env};

use crate::errors::Error;
use crate::types::prefix;

/// Interface of the contract that tracks point ownership, activation and
/// proxies. The pool never keeps its own view of custody; it asks here.
#[contractclient(name = "AuthorityClient")]
pub trait Authority {
    fn is_owner_of(env: Env, point: u32, who: Address) -> bool;

    /// Whether `who` owns the prefix (parent) of `point`
    fn is_parent_owner_of(env: Env, point: u32, who: Address) -> bool;

    fn has_ever_been_activated(env: Env, point: u32) -> bool;

    fn is_active(env: Env, point: u32) -> bool;

    /// Whether `who` may move `point` on its owner's behalf
    fn is_deposit_proxy_for(env: Env, point: u32, who: Address) -> bool;

    /// Whether `who` may spawn children of `point`
    fn is_spawn_proxy_for(env: Env, point: u32, who: Address) -> bool;

    /// Move custody of `point` to `to`. `operator` must be its owner or
    /// deposit proxy; `reset` clears every proxy on the point.
    fn transfer_custody(env: Env, operator: Address, point: u32, to: Address, reset: bool);

    /// Activate an inactive `point` with `to` as its first owner.
    fn spawn_into(env: Env, operator: Address, point: u32, to: Address);
}

/// How a depositor hands a star over to the pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DepositMode {
    /// The depositor owns a never-activated star and made the pool its
    /// deposit proxy.
    Transfer,
    /// The depositor owns the star's prefix, the star is unspawned, and the
    /// pool is the prefix's spawn proxy.
    Spawn,
}

pub fn deposit_mode(
    authority: &AuthorityClient,
    star: u32,
    depositor: &Address,
    pool: &Address,
) -> Option<DepositMode> {
    if authority.is_owner_of(&star, depositor)
        && !authority.has_ever_been_activated(&star)
        && authority.is_deposit_proxy_for(&star, pool)
    {
        return Some(DepositMode::Transfer);
    }

    if authority.is_parent_owner_of(&star, depositor)
        && !authority.is_active(&star)
        && authority.is_spawn_proxy_for(&prefix(star), pool)
    {
        return Some(DepositMode::Spawn);
    }

    None
}

/// Take custody of `star` for the pool using the given mode.
pub fn take_custody(
    env: &Env,
    authority: &AuthorityClient,
    mode: DepositMode,
    star: u32,
    pool: &Address,
) -> Result<(), Error> {
    let taken = match mode {
        DepositMode::Transfer => authority.try_transfer_custody(pool, &star, pool, &true),
        DepositMode::Spawn => authority.try_spawn_into(pool, &star, pool),
    };

    match taken {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "custody intake rejected", star);
            Err(Error::TransferFailed)
        }
    }
}

/// Hand custody of `star` from the pool to `to`, clearing its proxies.
pub fn release_custody(
    env: &Env,
    authority: &AuthorityClient,
    star: u32,
    pool: &Address,
    to: &Address,
) -> Result<(), Error> {
    match authority.try_transfer_custody(pool, &star, to, &true) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "custody release rejected", star);
            Err(Error::TransferFailed)
        }
    }
}
