pub mod utils;
pub mod video;
