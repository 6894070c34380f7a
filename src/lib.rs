//! swetest bridge library
//!
//! A typed front end for the Swiss Ephemeris `swetest` command-line tool.
//!
//! This library provides tools for:
//! - Building swetest command lines from typed options ([`CommandBuilder`])
//! - Running the executable with a timeout ([`SwissephExecutor`])
//! - Decoding the delimited output into planet and house rows ([`OutputParser`])
//! - Doing all three in one call ([`Swisseph`])
//!
//! ```no_run
//! use swetest_bridge::{HouseSystem, Swisseph, SwissephConfig};
//!
//! # async fn example() -> swetest_bridge::Result<()> {
//! let client = Swisseph::new(SwissephConfig::default());
//! let builder = client
//!     .builder()
//!     .set_location(17.038538, 51.107883, Some("Wroclaw"), 0.0)
//!     .with_houses(Some(HouseSystem::Koch));
//! let frame = client.get(&builder).await?;
//! println!("{} planets", frame.planets.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod client;
pub mod codes;
pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod models;
pub mod parser;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use builder::{CommandBuilder, format_float};
pub use client::Swisseph;
pub use codes::{
    Body, BodySelection, EphOption, HousePoint, HouseSystem, ObserverPosition, Property, Sidereal,
};
pub use config::SwissephConfig;
pub use error::{Result, SwissephError};
pub use executor::{CommandRunner, SwissephExecutor};
pub use models::{
    Command, CustomSidereal, HouseResult, Location, Observer, PlanetResult, Projection,
    PropertySequence, PropertyValue, Request, ResultFrame, SiderealSpec, Value,
};
pub use parser::OutputParser;
