pub mod config;
pub mod init;
pub mod lookup;
pub mod serve;
pub mod times;
