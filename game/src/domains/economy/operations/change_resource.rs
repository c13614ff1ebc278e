use crate::collections::Shared;
use crate::economy::Economy::ResourceChanged;
use crate::economy::EconomyError::{InsufficientResource, InvalidAmount, QuantityOverflow};
use crate::economy::{Economy, EconomyDomain, EconomyError, Resource, ResourceKey, ResourceKind};
use crate::Timestamp;

impl EconomyDomain {
    pub fn credit_resource<'operation>(
        &'operation mut self,
        kind: &Shared<ResourceKind>,
        amount: u32,
        now: Timestamp,
    ) -> Result<impl FnOnce() -> Vec<Economy> + 'operation, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        let quantity = self
            .quantity(kind.id)
            .checked_add(amount)
            .ok_or(QuantityOverflow {
                kind: Some(kind.id),
            })?;
        let kind = kind.clone();
        let operation = move || vec![self.put_quantity(kind, quantity, now)];
        Ok(operation)
    }

    pub fn debit_resource(
        &mut self,
        kind: ResourceKey,
        amount: u32,
        now: Timestamp,
    ) -> Result<impl FnOnce() -> Vec<Economy> + '_, EconomyError> {
        if amount == 0 {
            return Err(InvalidAmount { amount });
        }
        let index = self.ensure_quantity(kind, amount)?;
        let operation = move || {
            let resource = &mut self.resources[index];
            resource.quantity -= amount;
            resource.updated_at = now;
            vec![ResourceChanged {
                kind,
                quantity: resource.quantity,
            }]
        };
        Ok(operation)
    }

    /// Returns position of resource entry holding at least `amount`.
    pub(crate) fn ensure_quantity(
        &self,
        kind: ResourceKey,
        amount: u32,
    ) -> Result<usize, EconomyError> {
        let position = self
            .resources
            .iter()
            .position(|resource| resource.kind.id == kind);
        match position {
            Some(index) if self.resources[index].quantity >= amount => Ok(index),
            _ => Err(InsufficientResource {
                kind,
                required: amount,
                available: self.quantity(kind),
            }),
        }
    }

    pub(crate) fn put_quantity(
        &mut self,
        kind: Shared<ResourceKind>,
        quantity: u32,
        now: Timestamp,
    ) -> Economy {
        let key = kind.id;
        match self
            .resources
            .iter_mut()
            .find(|resource| resource.kind.id == key)
        {
            Some(resource) => {
                resource.quantity = quantity;
                resource.updated_at = now;
            }
            None => self.resources.push(Resource {
                kind,
                quantity,
                updated_at: now,
            }),
        }
        ResourceChanged {
            kind: key,
            quantity,
        }
    }
}
