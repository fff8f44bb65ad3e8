use soroban_sdk::{Address, Env, Symbol, contract, contractimpl, contracttype, symbol_short};

use crate::earner_rate;
use crate::error::Error;
use crate::interfaces::{MinterGatewayClient, RegistrarClient, TokenClient};
use crate::minter_rate;

const STORAGE: Symbol = symbol_short!("STORAGE");

#[contracttype]
#[derive(Clone)]
pub struct RateModelStorage {
    pub registrar: Address,
    pub minter_gateway: Address,
    pub token: Address,
}

/// Rate Model Contract
///
/// Stateless rate calculators over three read-only collaborators: the
/// registrar (parameter store), the minter gateway (reported owed totals)
/// and the token (earning supply). The token never calls back into this
/// contract; the host feeds the produced rate to the token's index update.
#[contract]
pub struct RateModelContract;

#[contractimpl]
impl RateModelContract {
    pub fn __constructor(env: Env, registrar: Address, minter_gateway: Address, token: Address) {
        let storage = RateModelStorage {
            registrar,
            minter_gateway,
            token,
        };
        env.storage().instance().set(&STORAGE, &storage);
    }

    /// Earner rate in basis points, provably covered by minter payments
    /// over the confidence window.
    pub fn earner_rate(env: Env) -> Result<u32, Error> {
        let storage = Self::storage(&env);

        let token = TokenClient::new(&env, &storage.token);
        if token.registrar() != storage.registrar {
            return Err(Error::InvalidRegistrar);
        }

        let max_rate = RegistrarClient::new(&env, &storage.registrar)
            .get(&Symbol::new(&env, registrar::MAX_EARNER_RATE_KEY));

        let gateway = MinterGatewayClient::new(&env, &storage.minter_gateway);
        let minter_rate = gateway.minter_rate();
        let total_active_owed = gateway.total_active_owed();
        let total_earning_supply = token.total_earning_supply();

        earner_rate::rate(
            max_rate.max(0) as u128,
            minter_rate,
            total_active_owed.max(0) as u128,
            total_earning_supply.max(0) as u128,
        )
        .map_err(Error::from)
    }

    /// Minter rate in basis points, capped by the model.
    pub fn minter_rate(env: Env) -> u32 {
        let storage = Self::storage(&env);
        let base_rate = RegistrarClient::new(&env, &storage.registrar)
            .get(&Symbol::new(&env, registrar::BASE_MINTER_RATE_KEY));
        minter_rate::minter_rate(base_rate.max(0) as u128)
    }

    pub fn registrar(env: Env) -> Address {
        Self::storage(&env).registrar
    }

    pub fn minter_gateway(env: Env) -> Address {
        Self::storage(&env).minter_gateway
    }

    pub fn token(env: Env) -> Address {
        Self::storage(&env).token
    }

    fn storage(env: &Env) -> RateModelStorage {
        env.storage().instance().get(&STORAGE).unwrap()
    }
}
