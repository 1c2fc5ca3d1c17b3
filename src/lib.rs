pub mod args;
pub mod feed;
pub mod model;
pub mod utils;
