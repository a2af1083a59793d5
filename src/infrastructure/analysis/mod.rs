pub mod disabled_analyzer;
pub mod traits;
