pub mod clipboard;
pub mod config;
pub mod item;
pub mod location;
pub mod notification;
pub mod question;
pub mod slug;
pub mod source;
