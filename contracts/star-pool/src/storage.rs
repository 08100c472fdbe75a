use soroban_sdk::{Address, Env};

use crate::types::{AllowanceValue, DataKey};

// TTL constants for storage entries
const DAY_IN_LEDGERS: u32 = 17280; // ~24 hours at 5s per ledger
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Extend the TTL of instance storage
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(
        key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

/// Get the authority contract address
pub fn get_authority(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Authority)
        .expect("Authority not set")
}

/// Set the authority contract address
pub fn set_authority(env: &Env, authority: &Address) {
    env.storage().instance().set(&DataKey::Authority, authority);
}

/// Get the total token supply
/// Returns 0 before the first deposit
pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

/// Get an account's token balance
/// Returns 0 if the account has no balance entry
pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

/// Set an account's token balance
pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    extend_persistent_ttl(env, &key);
}

/// Get the allowance `from` granted `spender`
/// Entries past their expiration ledger read as zero
pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

/// Store an allowance, keeping the entry alive until it expires
pub fn set_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

/// Number of occupied registry slots
pub fn get_held_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::HeldCount)
        .unwrap_or(0)
}

pub fn set_held_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::HeldCount, &count);
}

/// Star stored at a registry slot
pub fn get_held_star(env: &Env, index: u32) -> Option<u32> {
    let key = DataKey::HeldStar(index);
    let star = env.storage().persistent().get(&key);
    if star.is_some() {
        extend_persistent_ttl(env, &key);
    }
    star
}

pub fn set_held_star(env: &Env, index: u32, star: u32) {
    let key = DataKey::HeldStar(index);
    env.storage().persistent().set(&key, &star);
    extend_persistent_ttl(env, &key);
}

pub fn remove_held_star(env: &Env, index: u32) {
    env.storage().persistent().remove(&DataKey::HeldStar(index));
}

/// Registry slot of a star, if the pool holds it
pub fn get_star_index(env: &Env, star: u32) -> Option<u32> {
    let key = DataKey::StarIndex(star);
    let index = env.storage().persistent().get(&key);
    if index.is_some() {
        extend_persistent_ttl(env, &key);
    }
    index
}

pub fn set_star_index(env: &Env, star: u32, index: u32) {
    let key = DataKey::StarIndex(star);
    env.storage().persistent().set(&key, &index);
    extend_persistent_ttl(env, &key);
}

pub fn remove_star_index(env: &Env, star: u32) {
    env.storage().persistent().remove(&DataKey::StarIndex(star));
}
