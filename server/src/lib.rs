pub mod cleanup_task;
pub mod http_handler;
pub mod server_config;
pub mod web_server;
