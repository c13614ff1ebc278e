mod build_building;
mod buy_animal;
mod feed_animal;
mod harvest_crop;
mod plant_crop;
mod tend_farm;
mod trade_resource;
mod upgrade_building;
