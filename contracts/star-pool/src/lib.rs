#![no_std]

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

mod authority;
mod errors;
mod events;
mod ledger;
mod registry;
mod storage;
mod types;

pub use authority::{Authority, AuthorityClient};
pub use errors::Error;
pub use types::ONE_STAR;

use authority::DepositMode;
use registry::StarRegistry;
use types::PointClass;

#[contract]
pub struct StarPool;

#[contractimpl]
impl StarPool {
    /// Constructor: bind the pool to the authority contract that tracks
    /// point custody. Called automatically during contract deployment.
    ///
    /// # Arguments
    /// * `authority` - Contract consulted for ownership and custody transfers
    pub fn __constructor(env: Env, authority: Address) {
        storage::set_authority(&env, &authority);
        storage::extend_instance_ttl(&env);
    }

    /// Deposit a star into the pool and receive one STAR token for it.
    ///
    /// The depositor must either own an untouched star and have made the
    /// pool its deposit proxy, or own the star's galaxy and have made the
    /// pool the galaxy's spawn proxy.
    ///
    /// # Errors
    /// `InvalidAssetClass` for galaxies and planets, `Unauthorized` when
    /// neither deposit mode applies, `TransferFailed` when the authority
    /// refuses to hand over custody.
    pub fn deposit(env: Env, from: Address, star: u32) -> Result<(), Error> {
        from.require_auth();

        if PointClass::of(star) != PointClass::Star {
            return Err(Error::InvalidAssetClass);
        }

        storage::extend_instance_ttl(&env);

        let pool = env.current_contract_address();
        let authority = AuthorityClient::new(&env, &storage::get_authority(&env));

        let mode =
            authority::deposit_mode(&authority, star, &from, &pool).ok_or(Error::Unauthorized)?;
        match mode {
            DepositMode::Transfer => {
                log!(&env, "deposit by transfer", star);
            }
            DepositMode::Spawn => {
                log!(&env, "deposit by spawn", star);
            }
        }

        // Custody must be ours before the registry and ledger move
        authority::take_custody(&env, &authority, mode, star, &pool)?;

        StarRegistry::new(&env).insert(star)?;
        ledger::mint(&env, &from, ONE_STAR);

        events::emit_deposit(&env, &from, star);
        Ok(())
    }

    /// Burn one STAR token and take a specific star out of the pool.
    ///
    /// # Errors
    /// `InsufficientBalance` if `to` holds less than one token,
    /// `AssetNotHeld` if the pool does not hold `star`, `TransferFailed`
    /// if the authority refuses the custody transfer.
    pub fn withdraw(env: Env, to: Address, star: u32) -> Result<(), Error> {
        to.require_auth();

        storage::extend_instance_ttl(&env);

        if storage::get_balance(&env, &to) < ONE_STAR {
            return Err(Error::InsufficientBalance);
        }

        let registry = StarRegistry::new(&env);
        if !registry.contains(star) {
            return Err(Error::AssetNotHeld);
        }

        ledger::burn(&env, &to, ONE_STAR)?;
        registry.remove(star)?;
        Self::release(&env, star, &to)
    }

    /// Burn one STAR token and take whichever star sits in the registry's
    /// tail slot. Which star that is depends on the history of deposits and
    /// withdrawals; it is not necessarily the latest deposit.
    ///
    /// # Returns
    /// The star handed out
    ///
    /// # Errors
    /// `EmptyPool` if the pool holds no stars, `InsufficientBalance` if `to`
    /// holds less than one token, `TransferFailed` if the authority refuses
    /// the custody transfer.
    pub fn withdraw_any(env: Env, to: Address) -> Result<u32, Error> {
        to.require_auth();

        storage::extend_instance_ttl(&env);

        let registry = StarRegistry::new(&env);
        if registry.last().is_none() {
            return Err(Error::EmptyPool);
        }

        if storage::get_balance(&env, &to) < ONE_STAR {
            return Err(Error::InsufficientBalance);
        }

        ledger::burn(&env, &to, ONE_STAR)?;
        let star = registry.remove_last()?;
        Self::release(&env, star, &to)?;
        Ok(star)
    }

    /// All stars currently held, in slot order.
    pub fn get_all_stars(env: Env) -> Vec<u32> {
        storage::extend_instance_ttl(&env);
        StarRegistry::new(&env).to_vec()
    }

    pub fn get_star_count(env: Env) -> u32 {
        storage::extend_instance_ttl(&env);
        StarRegistry::new(&env).count()
    }

    pub fn is_held(env: Env, star: u32) -> bool {
        storage::extend_instance_ttl(&env);
        StarRegistry::new(&env).contains(star)
    }

    pub fn get_authority(env: Env) -> Address {
        storage::extend_instance_ttl(&env);
        storage::get_authority(&env)
    }

    /// Tokens exchanged per star
    pub fn exchange_unit(_env: Env) -> i128 {
        ONE_STAR
    }

    // Token interface. Supply only changes through deposit and withdraw.

    pub fn name(env: Env) -> String {
        String::from_str(&env, ledger::NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, ledger::SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        ledger::DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_balance(&env, &id)
    }

    /// Amount `spender` may still move out of `from`; zero once expired.
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::extend_instance_ttl(&env);
        storage::get_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        storage::extend_instance_ttl(&env);
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        storage::extend_instance_ttl(&env);
        if amount < 0 {
            return Err(Error::NegativeAmount);
        }
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::transfer(&env, &from, &to, amount)
    }
}

impl StarPool {
    fn release(env: &Env, star: u32, to: &Address) -> Result<(), Error> {
        let pool = env.current_contract_address();
        let authority = AuthorityClient::new(env, &storage::get_authority(env));
        authority::release_custody(env, &authority, star, &pool, to)?;

        log!(env, "star released", star);
        events::emit_withdraw(env, to, star);
        Ok(())
    }
}

#[cfg(test)]
mod testutils;
