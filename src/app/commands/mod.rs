pub mod add;
pub mod init;
pub mod remove;
pub mod render;
pub mod scaffold;
