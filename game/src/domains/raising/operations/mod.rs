mod buy_animal;
mod feed_animal;
