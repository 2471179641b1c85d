pub mod date_utils;
pub mod environment;
pub mod messages;
pub mod urls;
