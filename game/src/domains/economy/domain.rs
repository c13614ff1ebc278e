use serde::{Deserialize, Serialize};

use crate::collections::Shared;
use crate::Timestamp;

catalog_key!(ResourceKey {
    Grain => "grain" | "grudai",
    Fruit => "fruit" | "vaisiai",
    Milk => "milk" | "pienas",
    Eggs => "eggs" | "kiausiniai",
    Meat => "meat" | "mesa",
});

/// Market entry of a resource, prices are per unit.
#[derive(Debug)]
pub struct ResourceKind {
    pub id: ResourceKey,
    pub name: String,
    pub buy_price: u32,
    pub sell_price: u32,
}

#[derive(Debug, Clone)]
pub struct Produce {
    pub resource: Shared<ResourceKind>,
    pub amount: u32,
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub kind: Shared<ResourceKind>,
    pub quantity: u32,
    pub updated_at: Timestamp,
}

/// Resource ledger of one farm.
#[derive(Default)]
pub struct EconomyDomain {
    pub currency: u32,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Economy {
    CurrencyChanged { balance: u32 },
    ResourceChanged { kind: ResourceKey, quantity: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EconomyError {
    InvalidAmount {
        amount: u32,
    },
    InsufficientResource {
        kind: ResourceKey,
        required: u32,
        available: u32,
    },
    InsufficientFunds {
        required: u32,
        available: u32,
    },
    QuantityOverflow {
        kind: Option<ResourceKey>,
    },
}
