use soroban_sdk::{contracttype, Address};

/// Units of STAR minted per deposited star: one whole token at 18 decimals.
pub const ONE_STAR: i128 = 1_000_000_000_000_000_000;

/// Storage keys for the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// The authority contract that owns point custody
    Authority,
    /// Total STAR in circulation
    TotalSupply,
    /// Number of stars currently held by the pool
    HeldCount,
    /// Star stored at a registry slot: HeldStar(index)
    HeldStar(u32),
    /// Registry slot of a held star: StarIndex(star)
    StarIndex(u32),
    /// STAR balance of an account
    Balance(Address),
    /// Spending allowance: Allowance(owner, spender)
    Allowance(Address, Address),
}

/// An allowance entry together with the ledger it expires at
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// Size class of a point.
///
/// Galaxies occupy the first byte of the address space, stars the first two
/// bytes, and everything above is a planet. Only stars can enter the pool.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointClass {
    Galaxy,
    Star,
    Planet,
}

impl PointClass {
    pub fn of(point: u32) -> Self {
        if point < 0x100 {
            PointClass::Galaxy
        } else if point < 0x1_0000 {
            PointClass::Star
        } else {
            PointClass::Planet
        }
    }
}

/// The point one level up that issued this one. Galaxies are their own prefix.
pub fn prefix(point: u32) -> u32 {
    match PointClass::of(point) {
        PointClass::Galaxy => point,
        PointClass::Star => point & 0xFF,
        PointClass::Planet => point & 0xFFFF,
    }
}
