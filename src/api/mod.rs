//! API client module

pub mod client;
pub mod models;
pub mod resource;
pub mod response;

pub use client::FastlyClient;
