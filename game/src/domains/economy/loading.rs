use crate::economy::{EconomyDomain, Resource};

impl EconomyDomain {
    pub fn load_currency(&mut self, balance: u32) {
        self.currency = balance;
    }

    pub fn load_resources(&mut self, resources: Vec<Resource>) {
        self.resources.extend(resources);
    }
}
