pub mod batch;
pub mod category;
pub mod decode;
pub mod show_config;
