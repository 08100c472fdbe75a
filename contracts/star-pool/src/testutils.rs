#![cfg(test)]

//! A minimal point-custody contract for driving the pool in tests.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use crate::authority::Authority;
use crate::types::prefix;

#[derive(Clone, Debug, Default)]
#[contracttype]
pub struct PointRecord {
    pub owner: Option<Address>,
    pub active: bool,
    pub activated: bool,
    pub deposit_proxy: Option<Address>,
    pub spawn_proxy: Option<Address>,
    pub frozen: bool,
}

#[derive(Clone)]
#[contracttype]
enum MockKey {
    Point(u32),
}

const POINT_TTL: u32 = 30 * 17280;

// Each call bumps the instance and the touched record to a full TTL
fn read_point(env: &Env, point: u32) -> PointRecord {
    env.storage().instance().extend_ttl(POINT_TTL, POINT_TTL);

    let key = MockKey::Point(point);
    match env.storage().persistent().get(&key) {
        Some(record) => {
            env.storage().persistent().extend_ttl(&key, POINT_TTL, POINT_TTL);
            record
        }
        None => PointRecord::default(),
    }
}

fn write_point(env: &Env, point: u32, record: &PointRecord) {
    let key = MockKey::Point(point);
    env.storage().persistent().set(&key, record);
    env.storage().persistent().extend_ttl(&key, POINT_TTL, POINT_TTL);
}

#[contract]
pub struct MockAuthority;

#[contractimpl]
impl MockAuthority {
    /// Give `owner` an active point, as if it had been spawned directly.
    pub fn grant(env: Env, point: u32, owner: Address) {
        let mut record = read_point(&env, point);
        record.owner = Some(owner);
        record.active = true;
        write_point(&env, point, &record);
    }

    /// Mark a point as having been configured at some point in its life.
    pub fn activate(env: Env, point: u32) {
        let mut record = read_point(&env, point);
        record.activated = true;
        write_point(&env, point, &record);
    }

    pub fn set_deposit_proxy(env: Env, point: u32, proxy: Address) {
        let mut record = read_point(&env, point);
        record.deposit_proxy = Some(proxy);
        write_point(&env, point, &record);
    }

    pub fn set_spawn_proxy(env: Env, point: u32, proxy: Address) {
        let mut record = read_point(&env, point);
        record.spawn_proxy = Some(proxy);
        write_point(&env, point, &record);
    }

    /// Make every custody call touching `point` fail.
    pub fn freeze(env: Env, point: u32) {
        let mut record = read_point(&env, point);
        record.frozen = true;
        write_point(&env, point, &record);
    }

    pub fn thaw(env: Env, point: u32) {
        let mut record = read_point(&env, point);
        record.frozen = false;
        write_point(&env, point, &record);
    }

    pub fn owner_of(env: Env, point: u32) -> Option<Address> {
        read_point(&env, point).owner
    }

    pub fn deposit_proxy_of(env: Env, point: u32) -> Option<Address> {
        read_point(&env, point).deposit_proxy
    }
}

#[contractimpl]
impl Authority for MockAuthority {
    fn is_owner_of(env: Env, point: u32, who: Address) -> bool {
        read_point(&env, point).owner == Some(who)
    }

    fn is_parent_owner_of(env: Env, point: u32, who: Address) -> bool {
        read_point(&env, prefix(point)).owner == Some(who)
    }

    fn has_ever_been_activated(env: Env, point: u32) -> bool {
        read_point(&env, point).activated
    }

    fn is_active(env: Env, point: u32) -> bool {
        read_point(&env, point).active
    }

    fn is_deposit_proxy_for(env: Env, point: u32, who: Address) -> bool {
        read_point(&env, point).deposit_proxy == Some(who)
    }

    fn is_spawn_proxy_for(env: Env, point: u32, who: Address) -> bool {
        read_point(&env, point).spawn_proxy == Some(who)
    }

    fn transfer_custody(env: Env, operator: Address, point: u32, to: Address, reset: bool) {
        operator.require_auth();

        let mut record = read_point(&env, point);
        if record.frozen {
            panic!("Point is frozen");
        }
        let permitted = record.owner.as_ref() == Some(&operator)
            || record.deposit_proxy.as_ref() == Some(&operator);
        if !permitted {
            panic!("Operator may not transfer point");
        }

        record.owner = Some(to);
        if reset {
            record.deposit_proxy = None;
            record.spawn_proxy = None;
        }
        write_point(&env, point, &record);
    }

    fn spawn_into(env: Env, operator: Address, point: u32, to: Address) {
        operator.require_auth();

        let parent = read_point(&env, prefix(point));
        let permitted = parent.owner.as_ref() == Some(&operator)
            || parent.spawn_proxy.as_ref() == Some(&operator);
        if !permitted {
            panic!("Operator may not spawn point");
        }

        let mut record = read_point(&env, point);
        if record.frozen {
            panic!("Point is frozen");
        }
        if record.active {
            panic!("Point already active");
        }
        record.owner = Some(to);
        record.active = true;
        write_point(&env, point, &record);
    }
}
