//! HTTP handlers

pub mod health;
pub mod ingest;
pub mod legal_logs;
pub mod sandbox;

#[cfg(test)]
mod tests;
