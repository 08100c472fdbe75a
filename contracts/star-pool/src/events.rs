use soroban_sdk::{symbol_short, Address, Env};

/// Emit a deposit event
/// Topics: ("deposit", depositor)
/// Data: star
pub fn emit_deposit(env: &Env, depositor: &Address, star: u32) {
    let topics = (symbol_short!("deposit"), depositor.clone());
    env.events().publish(topics, star);
}

/// Emit a withdraw event once custody of the star has left the pool
/// Topics: ("withdraw", recipient)
/// Data: star
pub fn emit_withdraw(env: &Env, recipient: &Address, star: u32) {
    let topics = (symbol_short!("withdraw"), recipient.clone());
    env.events().publish(topics, star);
}

/// Topics: ("mint", to)
/// Data: amount
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    let topics = (symbol_short!("mint"), to.clone());
    env.events().publish(topics, amount);
}

/// Topics: ("burn", from)
/// Data: amount
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    let topics = (symbol_short!("burn"), from.clone());
    env.events().publish(topics, amount);
}

/// Topics: ("transfer", from, to)
/// Data: amount
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from.clone(), to.clone());
    env.events().publish(topics, amount);
}

/// Topics: ("approve", from, spender)
/// Data: (amount, expiration_ledger)
pub fn emit_approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let topics = (symbol_short!("approve"), from.clone(), spender.clone());
    let data = (amount, expiration_ledger);
    env.events().publish(topics, data);
}
