pub mod analysis;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod profile;
pub mod recognizer;
pub mod routes;
pub mod state;
