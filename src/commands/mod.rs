pub mod clean;
pub mod crop;
pub mod init;
pub mod launcher;
pub mod logo;
pub mod seed;
