mod place_structure;
mod upgrade_structure;
