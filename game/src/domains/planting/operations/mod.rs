mod harvest_crop;
mod plant_crop;
