//! Command-line argument definitions for swetest-bridge
//!
//! Defines the CLI interface with the clap derive API. Raw codes are kept as
//! strings here and validated by the command builder, so that invalid input
//! is reported with the same error messages the library uses.

use crate::codes::{Body, BodySelection, HouseSystem, ObserverPosition, Sidereal};
use crate::error::Result;
use crate::models::Projection;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the swetest bridge
///
/// Builds a swetest command from typed options, runs it and prints the
/// decoded planet and house positions.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "swetest-bridge",
    version,
    about = "Compute planet and house positions with the Swiss Ephemeris swetest tool",
    long_about = "Builds a swetest command line from typed options, runs the executable and \
                  decodes its delimited output into planet and house positions. Use --dry-run \
                  to print the command without running it."
)]
pub struct Args {
    /// Calculation date and time
    ///
    /// RFC 3339 (2025-03-23T21:21:00+01:00) or YYYY-MM-DD[ HH:MM[:SS]].
    /// Defaults to the current time.
    #[arg(short = 'd', long = "date", value_name = "DATETIME")]
    pub date: Option<String>,

    /// Timezone for a date without offset: UTC, an offset like +01:00 or a name like Europe/Warsaw
    #[arg(long = "tz", value_name = "TZ", default_value = "UTC")]
    pub tz: String,

    /// Geographic longitude in decimal degrees (east positive)
    #[arg(long = "lon", value_name = "DEGREES", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Geographic latitude in decimal degrees (north positive)
    #[arg(long = "lat", value_name = "DEGREES", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Place label copied into the result
    #[arg(long = "place", value_name = "NAME")]
    pub place: Option<String>,

    /// Elevation in metres, used by the topocentric observer
    #[arg(
        long = "elevation",
        value_name = "METRES",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub elevation: f64,

    /// Body selection codes (comma-separated), e.g. d or 0,1,4
    #[arg(short = 'b', long = "bodies", value_name = "CODES", value_delimiter = ',')]
    pub bodies: Vec<String>,

    /// Extra property codes (comma-separated), e.g. b,R
    #[arg(short = 'p', long = "properties", value_name = "CODES", value_delimiter = ',')]
    pub properties: Vec<String>,

    /// Calculate houses, optionally with an explicit house system code
    #[arg(
        long = "houses",
        value_name = "SYSTEM",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = ""
    )]
    pub houses: Option<String>,

    /// Observer position: geo, hel, bary, topo or pc
    #[arg(long = "observer", value_name = "POSITION")]
    pub observer: Option<String>,

    /// Reference body index for the planetocentric observer
    #[arg(long = "observer-body", value_name = "INDEX", allow_negative_numbers = true)]
    pub observer_body: Option<String>,

    /// Sidereal mode index (0-46)
    #[arg(long = "sidereal", value_name = "INDEX")]
    pub sidereal: Option<String>,

    /// Projection plane for sidereal positions
    #[arg(long = "projection", value_enum, default_value = "none")]
    pub projection: ProjectionArg,

    /// Extra ephemeris option codes (comma-separated), e.g. icrs,noaberr
    #[arg(short = 'e', long = "eph-option", value_name = "CODES", value_delimiter = ',')]
    pub eph_options: Vec<String>,

    /// Path to a JSON configuration file
    ///
    /// Defaults to swetest-bridge/config.json in the user config directory when present.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Print the swetest command without running it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Output format for results
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured table for terminals
    Table,
    /// JSON for scripting
    Json,
}

/// Sidereal projection plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectionArg {
    None,
    Ecliptic,
    SolarSystem,
}

impl From<ProjectionArg> for Projection {
    fn from(arg: ProjectionArg) -> Self {
        match arg {
            ProjectionArg::None => Projection::None,
            ProjectionArg::Ecliptic => Projection::EclipticPlane,
            ProjectionArg::SolarSystem => Projection::SolarSystemPlane,
        }
    }
}

impl Args {
    /// Get the log level based on verbosity and quiet flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    pub fn body_selections(&self) -> Result<Vec<BodySelection>> {
        self.bodies.iter().map(|code| code.trim().parse()).collect()
    }

    /// House system requested with `--houses`; `Some(None)` means the configured default
    pub fn house_system(&self) -> Result<Option<Option<HouseSystem>>> {
        match self.houses.as_deref().map(str::trim) {
            None => Ok(None),
            Some("") => Ok(Some(None)),
            Some(code) => Ok(Some(Some(code.parse()?))),
        }
    }

    pub fn observer_position(&self) -> Result<Option<(ObserverPosition, Option<Body>)>> {
        let Some(position) = &self.observer else {
            return Ok(None);
        };
        let position: ObserverPosition = position.trim().parse()?;
        let body = self
            .observer_body
            .as_deref()
            .map(str::parse::<Body>)
            .transpose()?;
        Ok(Some((position, body)))
    }

    pub fn sidereal_mode(&self) -> Result<Option<Sidereal>> {
        self.sidereal.as_deref().map(str::parse).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SwissephError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("swetest-bridge").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.tz, "UTC");
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.projection, ProjectionArg::None);
        assert!(args.houses.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&["-v"]).get_log_level(), "info");
        assert_eq!(parse(&["-vv"]).get_log_level(), "debug");
        assert_eq!(parse(&["-vvvv"]).get_log_level(), "trace");
        assert_eq!(parse(&["-q"]).get_log_level(), "error");
        assert!(Args::try_parse_from(["swetest-bridge", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_negative_coordinates() {
        let args = parse(&["--lon", "-0.001545", "--lat", "-33.9"]);
        assert_eq!(args.longitude, Some(-0.001545));
        assert_eq!(args.latitude, Some(-33.9));
    }

    #[test]
    fn test_comma_separated_lists() {
        let args = parse(&["--bodies", "0,1,4", "--properties", "b,R", "-e", "icrs"]);
        assert_eq!(
            args.body_selections().unwrap(),
            vec![BodySelection::Sun, BodySelection::Moon, BodySelection::Mars]
        );
        assert_eq!(args.properties, vec!["b", "R"]);
        assert_eq!(args.eph_options, vec!["icrs"]);
    }

    #[test]
    fn test_houses_flag_forms() {
        assert_eq!(parse(&[]).house_system().unwrap(), None);
        assert_eq!(parse(&["--houses"]).house_system().unwrap(), Some(None));
        assert_eq!(
            parse(&["--houses=K"]).house_system().unwrap(),
            Some(Some(HouseSystem::Koch))
        );
        assert!(matches!(
            parse(&["--houses=Z"]).house_system(),
            Err(SwissephError::InvalidHouseSystem { .. })
        ));
    }

    #[test]
    fn test_observer_position() {
        let args = parse(&["--observer", "pc", "--observer-body", "14"]);
        assert_eq!(
            args.observer_position().unwrap(),
            Some((ObserverPosition::Planetocentric, Some(Body::Earth)))
        );

        let args = parse(&["--observer", "sky"]);
        assert!(matches!(
            args.observer_position(),
            Err(SwissephError::InvalidObserverPosition { .. })
        ));
    }

    #[test]
    fn test_sidereal_and_projection() {
        let args = parse(&["--sidereal", "1", "--projection", "solar-system"]);
        assert_eq!(args.sidereal_mode().unwrap(), Some(Sidereal::Lahiri));
        assert_eq!(Projection::from(args.projection), Projection::SolarSystemPlane);

        assert!(parse(&["--sidereal", "99"]).sidereal_mode().is_err());
    }
}
