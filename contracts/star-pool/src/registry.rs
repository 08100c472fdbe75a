//! The set of stars the pool currently holds.
//!
//! Stars live in a dense run of slots `HeldStar(0..count)` with a reverse
//! index `StarIndex(star)`, so insertion, membership, position lookup and
//! removal of any star are all constant time. Removal swaps the tail star
//! into the vacated slot, which means slot order is not insertion order.

use soroban_sdk::{Env, Vec};

use crate::errors::Error;
use crate::storage;

#[derive(Clone, Copy)]
pub struct StarRegistry<'a> {
    env: &'a Env,
}

impl<'a> StarRegistry<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    pub fn count(&self) -> u32 {
        storage::get_held_count(self.env)
    }

    pub fn contains(&self, star: u32) -> bool {
        self.position(star).is_some()
    }

    /// Slot currently occupied by `star`, or `None` if it is not held.
    pub fn position(&self, star: u32) -> Option<u32> {
        storage::get_star_index(self.env, star)
    }

    pub fn get(&self, index: u32) -> Option<u32> {
        if index >= self.count() {
            return None;
        }
        storage::get_held_star(self.env, index)
    }

    /// The star in the tail slot. This is what `withdraw_any` hands out.
    pub fn last(&self) -> Option<u32> {
        self.count()
            .checked_sub(1)
            .and_then(|index| self.get(index))
    }

    pub fn insert(&self, star: u32) -> Result<(), Error> {
        if self.contains(star) {
            return Err(Error::AlreadyHeld);
        }

        let index = self.count();
        storage::set_held_star(self.env, index, star);
        storage::set_star_index(self.env, star, index);
        storage::set_held_count(self.env, index + 1);
        Ok(())
    }

    pub fn remove(&self, star: u32) -> Result<(), Error> {
        let index = self.position(star).ok_or(Error::AssetNotHeld)?;
        let last = self.count() - 1;

        if index != last {
            let moved = storage::get_held_star(self.env, last).expect("Registry slot missing");
            storage::set_held_star(self.env, index, moved);
            storage::set_star_index(self.env, moved, index);
        }

        storage::remove_held_star(self.env, last);
        storage::remove_star_index(self.env, star);
        storage::set_held_count(self.env, last);
        Ok(())
    }

    /// Remove and return the tail star.
    pub fn remove_last(&self) -> Result<u32, Error> {
        let last = self.count().checked_sub(1).ok_or(Error::EmptyPool)?;
        let star = storage::get_held_star(self.env, last).expect("Registry slot missing");

        storage::remove_held_star(self.env, last);
        storage::remove_star_index(self.env, star);
        storage::set_held_count(self.env, last);
        Ok(star)
    }

    /// Lazily walk the stars held when the iterator is created.
    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        let env = self.env;
        (0..self.count())
            .map(move |index| storage::get_held_star(env, index).expect("Registry slot missing"))
    }

    pub fn to_vec(&self) -> Vec<u32> {
        let mut stars = Vec::new(self.env);
        for star in self.iter() {
            stars.push_back(star);
        }
        stars
    }
}
