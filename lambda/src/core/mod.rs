//! Configuration, request/response models and the summarization flow.

pub mod config;
pub mod features;
pub mod models;
