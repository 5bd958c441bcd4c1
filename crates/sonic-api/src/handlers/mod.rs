pub mod file_link;
pub mod health;
pub mod service_info;
pub mod upload;
