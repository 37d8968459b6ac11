mod recycling_center;

pub use recycling_center::{RecyclingCenter, RECYCLING_CENTERS};
