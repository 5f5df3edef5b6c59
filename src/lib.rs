pub mod app_state;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;
pub mod sessions;

#[cfg(test)]
pub mod test_utils;
