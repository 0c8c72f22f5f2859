pub mod config;
pub mod export;
pub mod init;
pub mod topics;
pub mod view;
