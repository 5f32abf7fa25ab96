pub mod error;
pub mod provider;
pub mod repo;
pub mod service;
