use crate::collections::Shared;
use crate::economy::Economy::CurrencyChanged;
use crate::economy::EconomyError::{InsufficientFunds, InvalidAmount, QuantityOverflow};
use crate::economy::{Economy, EconomyDomain, EconomyError, ResourceKind};
use crate::Timestamp;

impl EconomyDomain {
    pub fn buy_resource<'operation>(
        &'operation mut self,
        kind: &Shared<ResourceKind>,
        amount: u32,
        now: Timestamp,
    ) -> Result<impl FnOnce() -> Vec<Economy> + 'operation, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        let cost = kind
            .buy_price
            .checked_mul(amount)
            .ok_or(InvalidAmount { amount })?;
        if cost > self.currency {
            return Err(InsufficientFunds {
                required: cost,
                available: self.currency,
            });
        }
        let quantity = self
            .quantity(kind.id)
            .checked_add(amount)
            .ok_or(QuantityOverflow {
                kind: Some(kind.id),
            })?;
        let kind = kind.clone();
        let operation = move || {
            self.currency -= cost;
            let balance = self.currency;
            vec![
                CurrencyChanged { balance },
                self.put_quantity(kind, quantity, now),
            ]
        };
        Ok(operation)
    }

    pub fn sell_resource<'operation>(
        &'operation mut self,
        kind: &Shared<ResourceKind>,
        amount: u32,
        now: Timestamp,
    ) -> Result<impl FnOnce() -> Vec<Economy> + 'operation, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        let index = self.ensure_quantity(kind.id, amount)?;
        let revenue = kind
            .sell_price
            .checked_mul(amount)
            .ok_or(InvalidAmount { amount })?;
        let balance = self
            .currency
            .checked_add(revenue)
            .ok_or(QuantityOverflow { kind: None })?;
        let quantity = self.resources[index].quantity - amount;
        let kind = kind.clone();
        let operation = move || {
            self.currency = balance;
            vec![
                self.put_quantity(kind, quantity, now),
                CurrencyChanged { balance },
            ]
        };
        Ok(operation)
    }
}
