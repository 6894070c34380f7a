//! Application constants for swetest_bridge
//!
//! Default values, fixed command flags and output markers shared by the
//! command builder, the output parser and the configuration layer.

// =============================================================================
// Reference Location
// =============================================================================

/// Longitude of the Greenwich reference location
pub const DEFAULT_LONGITUDE: f64 = -0.001545;

/// Latitude of the Greenwich reference location
pub const DEFAULT_LATITUDE: f64 = 51.477928;

/// Elevation of the reference location in metres
pub const DEFAULT_ELEVATION: f64 = 0.0;

/// Place label used until the caller provides one
pub const DEFAULT_PLACE: &str = "Greenwich";

// =============================================================================
// Command Flags
// =============================================================================

/// Marker prepended to every flag body when the process is spawned
pub const FLAG_MARKER: char = '-';

/// Prefix of the ephemeris directory flag
pub const EPHEMERIS_DIR_PREFIX: &str = "edir";

/// Output formatting flag: `g` followed by the column delimiter
pub const FORMAT_FLAG: &str = "gPPP";

/// Suppresses the header lines swetest prints by default
pub const NO_HEADER_FLAG: &str = "head";

/// Delimiter between output columns, set by [`FORMAT_FLAG`]
pub const COLUMN_DELIMITER: &str = "PPP";

/// Decimal places kept when a float is rendered into a flag
pub const FLOAT_PRECISION: usize = 8;

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default path to the swetest executable
pub const DEFAULT_EXECUTABLE: &str = "swisseph/swetest";

/// Default ephemeris data directory
pub const DEFAULT_EPHEMERIS_DIR: &str = "swisseph/ephe";

/// Default house system code
pub const DEFAULT_HOUSE_SYSTEM: &str = "P";

/// Default process timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "swetest-bridge";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variables read by the layered configuration
pub mod env_vars {
    pub const EXECUTABLE: &str = "SWISSEPH_EXECUTABLE";
    pub const EPHEMERIS_DIR: &str = "SWISSEPH_EPHEMERIS_DIR";
    pub const EPHEMERIS_TYPE: &str = "SWISSEPH_EPHEMERIS_TYPE";
    pub const TRUE_POSITIONS: &str = "SWISSEPH_TRUE_POSITIONS";
    pub const NO_NUTATION: &str = "SWISSEPH_NO_NUTATION";
    pub const HOUSE_SYSTEM: &str = "SWISSEPH_HOUSESYSTEM";
    pub const TIMEOUT: &str = "SWISSEPH_TIMEOUT";
}
