// Library for tests to access modules

pub mod cli;
pub mod config;
pub mod logger;
pub mod models;
pub mod network;
pub mod status;
pub mod sysinfo_repo;
pub mod version;
