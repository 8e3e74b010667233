pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod notify;
pub mod pages;
pub mod server;
pub mod validation;

#[cfg(test)]
mod testing;
