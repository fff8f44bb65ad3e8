use soroban_sdk::{Address, Env, contractevent};

/// Events emitted by the token contract
#[contractevent]
pub struct IndexUpdatedEvent {
    pub current_index: u128,
    pub rate: u32,
}

#[contractevent]
pub struct StartedEarningEvent {
    pub account: Address,
}

#[contractevent]
pub struct StoppedEarningEvent {
    pub account: Address,
}

/// `None` on either side denotes mint / burn
#[contractevent]
pub struct TransferEvent {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub amount: i128,
}

#[contractevent]
pub struct ApproveEvent {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub live_until_ledger: u32,
}

/// Helper struct for publishing events
pub struct Events;

impl Events {
    pub fn index_updated(env: &Env, current_index: u128, rate: u32) {
        IndexUpdatedEvent {
            current_index,
            rate,
        }
        .publish(env);
    }

    pub fn started_earning(env: &Env, account: &Address) {
        StartedEarningEvent {
            account: account.clone(),
        }
        .publish(env);
    }

    pub fn stopped_earning(env: &Env, account: &Address) {
        StoppedEarningEvent {
            account: account.clone(),
        }
        .publish(env);
    }

    pub fn mint(env: &Env, to: &Address, amount: i128) {
        TransferEvent {
            from: None,
            to: Some(to.clone()),
            amount,
        }
        .publish(env);
    }

    pub fn burn(env: &Env, from: &Address, amount: i128) {
        TransferEvent {
            from: Some(from.clone()),
            to: None,
            amount,
        }
        .publish(env);
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        TransferEvent {
            from: Some(from.clone()),
            to: Some(to.clone()),
            amount,
        }
        .publish(env);
    }

    pub fn approve(env: &Env, from: &Address, spender: &Address, amount: i128, live_until_ledger: u32) {
        ApproveEvent {
            from: from.clone(),
            spender: spender.clone(),
            amount,
            live_until_ledger,
        }
        .publish(env);
    }
}
