pub mod catalog_server;
pub mod connect_proxy;
