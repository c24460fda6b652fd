//! Core business logic services

pub mod availability;
pub mod fetcher;
pub mod materializer;
pub mod pipeline;
pub mod request_builder;
pub mod table_extractor;
