pub mod export;
pub mod show;
pub mod source;
pub mod view;
