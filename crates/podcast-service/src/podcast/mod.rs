//! Podcast and episode management.

pub mod service;

pub use service::PodcastService;
