pub mod bucket;
pub mod generator_config;
pub mod series;
