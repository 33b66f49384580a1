mod detect;
mod table;

pub use detect::build_detect_config;
pub use table::{TableSource, load_table};
