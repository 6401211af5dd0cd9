use crate::error::Error;

pub mod account;
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod state;

pub type Result<T> = std::result::Result<T, Error>;
