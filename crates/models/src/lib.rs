pub mod errors;
pub mod db;
pub mod ids;
pub mod organization;
pub mod user;
pub mod service;
pub mod version;

#[cfg(test)]
mod tests;
