pub mod browser;
pub mod config;
pub mod contact_link;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod number_format;
