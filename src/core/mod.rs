//! Core domain: the animation engine, section choreography and page content

pub mod animation;
pub mod choreography;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod navigation;
