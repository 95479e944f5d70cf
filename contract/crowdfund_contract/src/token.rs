use soroban_sdk::{contractclient, log, Address, Env};

use crate::storage_types::Error;

/// The slice of a SEP-41 token the escrow relies on. The Stellar Asset
/// Contract satisfies it, as does any conforming token contract.
#[contractclient(name = "FundingTokenClient")]
pub trait FundingToken {
    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    /// `spender` moves `amount` out of `from` using an allowance `from` granted earlier.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
}

/// Pull a contribution into custody against the payer's allowance.
pub fn collect(env: &Env, token: &Address, payer: &Address, amount: i128) -> Result<(), Error> {
    let token_client = FundingTokenClient::new(env, token);
    let custody = env.current_contract_address();

    match token_client.try_transfer_from(&custody, payer, &custody, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "collect rejected", payer.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

/// Pay out of custody.
pub fn disburse(env: &Env, token: &Address, recipient: &Address, amount: i128) -> Result<(), Error> {
    let token_client = FundingTokenClient::new(env, token);

    match token_client.try_transfer(&env.current_contract_address(), recipient, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "disburse rejected", recipient.clone(), amount);
            Err(Error::TransferFailed)
        }
    }
}

pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    FundingTokenClient::new(env, token).balance(&env.current_contract_address())
}
