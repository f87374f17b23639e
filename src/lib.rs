// The binary is the product; the library surface exists for integration tests.
pub mod catalog;
pub mod cli;
pub mod config;
pub mod contact;
pub mod listing;
pub mod logging;
pub mod render;
pub mod routes;
pub mod server;
pub mod share;
pub mod timeline;
