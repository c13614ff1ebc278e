mod change_currency;
mod change_resource;
mod trade_resource;
