pub mod catalog_server;
