pub mod api_connection;
pub mod catalog;
pub mod chef;
pub mod cli;
pub mod controller;
pub mod data;
pub mod recipe;
pub mod reveal;
pub mod storage;
pub mod store;
