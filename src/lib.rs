pub mod auth_client;
pub mod configuration;
pub mod constant;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form;
pub mod navigation;
pub mod request;
pub mod session_store;
pub mod telemetry;
