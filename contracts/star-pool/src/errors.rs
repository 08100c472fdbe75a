use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Only star-class points can be deposited
    InvalidAssetClass = 1,
    /// The depositor satisfies neither deposit mode
    Unauthorized = 2,
    InsufficientBalance = 3,
    /// The requested star is not in the pool
    AssetNotHeld = 4,
    EmptyPool = 5,
    /// The authority rejected a custody transfer or spawn
    TransferFailed = 6,
    AlreadyHeld = 7,
    InsufficientAllowance = 8,
    NegativeAmount = 9,
    InvalidExpiration = 10,
}
