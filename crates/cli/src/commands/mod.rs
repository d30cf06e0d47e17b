pub mod import;
pub mod placeholders;
pub mod upload_dir;
pub mod verify;
