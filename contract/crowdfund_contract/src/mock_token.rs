//! In-memory token used to drive the escrow against failing transfers.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use crate::token::FundingToken;

#[derive(Clone)]
#[contracttype]
pub enum MockKey {
    Balance(Address),
    Allowance(Address, Address), // (Owner, Spender)
    Frozen,
}

#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = read_balance(&env, &to);
        write_balance(&env, &to, balance + amount);
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        env.storage().instance().set(&MockKey::Allowance(from, spender), &amount);
    }

    /// While frozen every movement of funds is rejected.
    pub fn set_frozen(env: Env, frozen: bool) {
        env.storage().instance().set(&MockKey::Frozen, &frozen);
    }
}

#[contractimpl]
impl FundingToken for MockToken {
    fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        move_funds(&env, &from, &to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        let key = MockKey::Allowance(from.clone(), spender);
        let allowance: i128 = env.storage().instance().get(&key).unwrap_or(0);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        env.storage().instance().set(&key, &(allowance - amount));

        move_funds(&env, &from, &to, amount);
    }
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .instance()
        .get(&MockKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage().instance().set(&MockKey::Balance(id.clone()), &amount);
}

fn move_funds(env: &Env, from: &Address, to: &Address, amount: i128) {
    let frozen: bool = env.storage().instance().get(&MockKey::Frozen).unwrap_or(false);
    if frozen {
        panic!("token frozen");
    }

    let from_balance = read_balance(env, from);
    if from_balance < amount {
        panic!("insufficient balance");
    }
    write_balance(env, from, from_balance - amount);
    let to_balance = read_balance(env, to);
    write_balance(env, to, to_balance + amount);
}
