pub mod capability;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod logger;

pub use config::{Config, IconTarget, Palette};
pub use error::IconError;
