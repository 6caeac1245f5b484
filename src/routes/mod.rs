pub mod health;
pub mod relay;
pub mod static_files;
