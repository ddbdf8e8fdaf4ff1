pub mod chat;
pub mod cli;
pub mod contact;
pub mod skills;
