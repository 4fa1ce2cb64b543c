pub mod ingest;
pub mod sim;
pub mod state;
pub mod vector;
pub mod viewer;
pub mod web;
