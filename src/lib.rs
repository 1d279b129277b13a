pub mod competition_service;
pub mod config_handler;
pub mod errors;
pub mod goal_service;
pub mod models;
pub mod models_external;
pub mod rest_client;
