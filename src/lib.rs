pub mod api;
pub mod config;
pub mod dashboard;
pub mod models;
#[cfg(test)]
pub mod test_helpers;
