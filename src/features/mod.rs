pub mod certificates;
pub mod collections;
pub mod recycling_centers;
pub mod wastes;
