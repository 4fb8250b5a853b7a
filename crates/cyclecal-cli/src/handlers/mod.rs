pub mod init;
pub mod pick;
pub mod show;
