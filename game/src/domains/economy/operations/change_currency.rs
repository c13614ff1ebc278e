use crate::economy::Economy::CurrencyChanged;
use crate::economy::EconomyError::{InsufficientFunds, InvalidAmount, QuantityOverflow};
use crate::economy::{Economy, EconomyDomain, EconomyError};

impl EconomyDomain {
    pub fn credit_currency(
        &mut self,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        let balance = self
            .currency
            .checked_add(amount)
            .ok_or(QuantityOverflow { kind: None })?;
        let operation = move || {
            self.currency = balance;
            vec![CurrencyChanged { balance }]
        };
        Ok(operation)
    }

    pub fn debit_currency(
        &mut self,
        amount: u32,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        if amount > self.currency {
            return Err(InsufficientFunds {
                required: amount,
                available: self.currency,
            });
        }
        let operation = move || {
            self.currency -= amount;
            vec![CurrencyChanged {
                balance: self.currency,
            }]
        };
        Ok(operation)
    }
}
