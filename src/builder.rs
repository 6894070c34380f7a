//! Fluent builder for swetest command lines.
//!
//! Accumulates calculation parameters and renders them into the ordered
//! flag list swetest expects. The flag order produced by [`CommandBuilder::build`]
//! is fixed:
//!
//! 1. ephemeris directory (`edir…`)
//! 2. ephemeris options, sorted by code
//! 3. date (`bDD.MM.YYYY`) and time (`utHH:MM:SS`, UTC)
//! 4. body selection (`p…`, defaults to `pd`)
//! 5. houses (`house<lon>,<lat>,<system>`), sidereal mode, observer position
//! 6. property sequence (`f…`)
//! 7. the output format flags `gPPP` and `head`

use crate::codes::{Body, BodySelection, EphOption, HouseSystem, ObserverPosition, Property, Sidereal};
use crate::config::SwissephConfig;
use crate::constants::{EPHEMERIS_DIR_PREFIX, FLOAT_PRECISION, FORMAT_FLAG, NO_HEADER_FLAG};
use crate::error::{Result, SwissephError};
use crate::models::{
    Command, CustomSidereal, FrameContext, Location, Observer, Projection, PropertySequence,
    Request, SiderealSpec,
};
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static OFFSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])(\d{2}):?(\d{2})$").expect("offset pattern is a valid regex")
});

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Builder for a single swetest request
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    executable: String,
    ephemeris_dir_flag: String,
    default_house_system: HouseSystem,
    date_time: DateTime<Utc>,
    location: Location,
    bodies: Vec<BodySelection>,
    properties: PropertySequence,
    eph_options: BTreeSet<EphOption>,
    house_system: Option<HouseSystem>,
    observer: Option<Observer>,
    sidereal: Option<SiderealSpec>,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(&SwissephConfig::default())
    }
}

impl CommandBuilder {
    /// Create a builder from configuration; the date defaults to now
    pub fn new(config: &SwissephConfig) -> Self {
        Self {
            executable: config.executable.to_string_lossy().into_owned(),
            ephemeris_dir_flag: ephemeris_dir_flag(&config.ephemeris_dir),
            default_house_system: config.house_system(),
            date_time: Utc::now(),
            location: Location::default(),
            bodies: Vec::new(),
            properties: PropertySequence::default(),
            eph_options: config.eph_options.iter().copied().collect(),
            house_system: None,
            observer: None,
            sidereal: None,
        }
    }

    /// Set the calculation instant; it is stored in UTC
    pub fn set_date_time<Tz: TimeZone>(mut self, date_time: DateTime<Tz>) -> Self {
        self.date_time = date_time.with_timezone(&Utc);
        self
    }

    /// Parse and set the calculation instant
    ///
    /// `input` is RFC 3339 or `YYYY-MM-DD[ T]HH:MM[:SS]` or a bare date. A
    /// naive input is read in `tz`, which is `UTC`, a fixed offset such as
    /// `+01:00` or an IANA name such as `Europe/Warsaw`. An explicit offset
    /// in `input` wins over `tz`. Local times that fall into a daylight
    /// saving gap or fold are rejected.
    pub fn set_date_time_str(self, input: &str, tz: &str) -> Result<Self> {
        let date_time = parse_date_time(input, tz)?;
        Ok(self.set_date_time(date_time))
    }

    /// Set coordinates and elevation; `place` replaces the label only when given
    pub fn set_location(mut self, longitude: f64, latitude: f64, place: Option<&str>, elevation: f64) -> Self {
        self.location.longitude = longitude;
        self.location.latitude = latitude;
        self.location.elevation = elevation;
        if let Some(place) = place {
            self.location.place = place.to_string();
        }
        self
    }

    pub fn set_place(mut self, place: impl Into<String>) -> Self {
        self.location.place = place.into();
        self
    }

    /// Replace the body selection
    pub fn select_bodies<I>(mut self, bodies: I) -> Self
    where
        I: IntoIterator<Item = BodySelection>,
    {
        self.bodies = bodies.into_iter().collect();
        self
    }

    /// Replace the body selection with a single raw selection code
    pub fn select_bodies_code(self, code: &str) -> Result<Self> {
        let selection: BodySelection = code.parse()?;
        Ok(self.select_bodies([selection]))
    }

    /// Add properties after the default prefix, skipping duplicates
    pub fn with_properties<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = Property>,
    {
        for property in properties {
            if property.is_default() {
                continue;
            }
            self.properties.push(property);
        }
        self
    }

    /// Add properties given as raw codes; nothing is added if any code is unknown
    pub fn with_property_codes<I, S>(self, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let properties = codes
            .into_iter()
            .map(|code| code.as_ref().parse::<Property>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_properties(properties))
    }

    /// Request house cusps and add the house position properties
    ///
    /// Without an explicit system the configured default is used.
    pub fn with_houses(mut self, system: Option<HouseSystem>) -> Self {
        self.house_system = Some(system.unwrap_or(self.default_house_system));
        for property in Property::HOUSE_PROPERTIES {
            self.properties.push(property);
        }
        self
    }

    pub fn set_observer(mut self, observer: Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set the observer from a position code and optional reference body
    ///
    /// The body is only used for [`ObserverPosition::Planetocentric`], which
    /// fails with [`SwissephError::MissingPlanetocentricBody`] without one.
    pub fn set_observer_position(self, position: ObserverPosition, body: Option<Body>) -> Result<Self> {
        let observer = match position {
            ObserverPosition::Geocentric => Observer::Geocentric,
            ObserverPosition::Heliocentric => Observer::Heliocentric,
            ObserverPosition::Barycentric => Observer::Barycentric,
            ObserverPosition::Topocentric => Observer::Topocentric,
            ObserverPosition::Planetocentric => {
                Observer::Planetocentric(body.ok_or(SwissephError::MissingPlanetocentricBody)?)
            }
        };
        Ok(self.set_observer(observer))
    }

    /// Use a predefined ayanamsha, replacing any previous sidereal setting
    pub fn with_sidereal(mut self, mode: Sidereal, projection: Projection) -> Self {
        self.sidereal = Some(SiderealSpec::Named { mode, projection });
        self
    }

    /// Use a user defined ayanamsha, replacing any previous sidereal setting
    pub fn with_custom_sidereal(mut self, custom: CustomSidereal) -> Self {
        self.sidereal = Some(SiderealSpec::Custom(custom));
        self
    }

    pub fn with_eph_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = EphOption>,
    {
        self.eph_options.extend(options);
        self
    }

    /// Add ephemeris options given as raw codes; nothing is added if any code is unknown
    pub fn with_eph_option_codes<I, S>(self, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = codes
            .into_iter()
            .map(|code| code.as_ref().parse::<EphOption>())
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_eph_options(options))
    }

    pub fn properties(&self) -> &PropertySequence {
        &self.properties
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn place(&self) -> &str {
        &self.location.place
    }

    pub fn date_time(&self) -> DateTime<Utc> {
        self.date_time
    }

    pub fn house_system(&self) -> Option<HouseSystem> {
        self.house_system
    }

    pub fn observer(&self) -> Option<Observer> {
        self.observer
    }

    pub fn sidereal(&self) -> Option<SiderealSpec> {
        self.sidereal
    }

    pub fn eph_options(&self) -> impl Iterator<Item = EphOption> + '_ {
        self.eph_options.iter().copied()
    }

    /// Render the current state into a request; may be called repeatedly
    pub fn build(&self) -> Request {
        let mut arguments = vec![self.ephemeris_dir_flag.clone()];
        arguments.extend(self.eph_options.iter().map(|option| option.code().to_string()));
        arguments.push(format!("b{}", self.date_time.format("%d.%m.%Y")));
        arguments.push(format!("ut{}", self.date_time.format("%H:%M:%S")));
        arguments.push(self.bodies_flag());

        if let Some(system) = self.house_system {
            arguments.push(format!(
                "house{},{},{}",
                format_float(self.location.longitude),
                format_float(self.location.latitude),
                system.code()
            ));
        }

        if let Some(sidereal) = &self.sidereal {
            arguments.push(sidereal_flag(sidereal));
        }

        if let Some(observer) = self.observer.and_then(|observer| self.observer_flag(observer)) {
            arguments.push(observer);
        }

        arguments.push(format!("f{}", self.properties.codes()));
        arguments.push(FORMAT_FLAG.to_string());
        arguments.push(NO_HEADER_FLAG.to_string());

        let command = Command {
            executable: self.executable.clone(),
            arguments,
        };
        debug!("Built swetest command: {}", command);

        Request {
            command,
            properties: self.properties.clone(),
            context: FrameContext {
                place: self.location.place.clone(),
                date: self.date_time,
                longitude: self.location.longitude,
                latitude: self.location.latitude,
                house_system: self.house_system,
            },
        }
    }

    fn bodies_flag(&self) -> String {
        if self.bodies.is_empty() {
            return format!("p{}", BodySelection::DefaultFactors.code());
        }
        let codes: String = self.bodies.iter().map(|body| body.code()).collect();
        format!("p{}", codes)
    }

    // Geocentric is swetest's default and has no flag of its own.
    fn observer_flag(&self, observer: Observer) -> Option<String> {
        match observer {
            Observer::Geocentric => None,
            Observer::Heliocentric => Some(ObserverPosition::Heliocentric.code().to_string()),
            Observer::Barycentric => Some(ObserverPosition::Barycentric.code().to_string()),
            Observer::Topocentric => Some(format!(
                "{}{},{},{}",
                ObserverPosition::Topocentric.code(),
                format_float(self.location.longitude),
                format_float(self.location.latitude),
                format_float(self.location.elevation)
            )),
            Observer::Planetocentric(body) => Some(format!(
                "{}{}",
                ObserverPosition::Planetocentric.code(),
                body.code()
            )),
        }
    }
}

/// Render a float with up to eight decimals, without trailing zeros or dot
pub fn format_float(value: f64) -> String {
    let fixed = format!("{:.*}", FLOAT_PRECISION, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };

    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn ephemeris_dir_flag(dir: &Path) -> String {
    let normalized = dir.to_string_lossy().replace('\\', "/");
    let trimmed = normalized.trim_end_matches('/').trim_start_matches('/');
    format!("{}/{}", EPHEMERIS_DIR_PREFIX, trimmed)
}

fn sidereal_flag(spec: &SiderealSpec) -> String {
    match spec {
        SiderealSpec::Named { mode, projection } => match projection {
            Projection::None => format!("sid{}", mode.code()),
            Projection::EclipticPlane => format!("sidt0{}", mode.code()),
            Projection::SolarSystemPlane => format!("sidsp{}", mode.code()),
        },
        SiderealSpec::Custom(custom) => {
            let mut values = vec![custom.julian_day.to_string(), custom.ayanamsha.to_string()];
            if custom.ayanamsha_in_ut {
                values.push("jdisut".to_string());
            }
            match custom.projection {
                Projection::None => {}
                Projection::EclipticPlane => values.push("eclt0".to_string()),
                Projection::SolarSystemPlane => values.push("ssyplane".to_string()),
            }
            format!("sidudef{}", values.join(","))
        }
    }
}

/// Time zone a naive input is read in
enum InputZone {
    Fixed(FixedOffset),
    Named(Tz),
}

fn parse_zone(tz: &str) -> Result<InputZone> {
    let tz = tz.trim();
    if ["utc", "gmt", "z"].iter().any(|name| tz.eq_ignore_ascii_case(name)) {
        return FixedOffset::east_opt(0)
            .map(InputZone::Fixed)
            .ok_or_else(|| SwissephError::datetime_parsing(tz, "invalid UTC offset"));
    }

    if let Some(captures) = OFFSET_PATTERN.captures(tz) {
        let hours: i32 = captures[2].parse().unwrap_or_default();
        let minutes: i32 = captures[3].parse().unwrap_or_default();
        let seconds = hours * 3600 + minutes * 60;
        let seconds = if &captures[1] == "-" { -seconds } else { seconds };

        return FixedOffset::east_opt(seconds)
            .map(InputZone::Fixed)
            .ok_or_else(|| SwissephError::datetime_parsing(tz, "offset out of range"));
    }

    tz.parse::<Tz>().map(InputZone::Named).map_err(|_| {
        SwissephError::datetime_parsing(
            tz,
            "unknown timezone, expected UTC, an offset like +01:00 or a name like Europe/Warsaw",
        )
    })
}

fn localize<Z: TimeZone>(zone: &Z, naive: &NaiveDateTime, input: &str) -> Result<DateTime<Utc>> {
    match zone.from_local_datetime(naive) {
        LocalResult::Single(date_time) => Ok(date_time.with_timezone(&Utc)),
        LocalResult::Ambiguous(..) => Err(SwissephError::datetime_parsing(
            input,
            "ambiguous local time in a daylight saving fold",
        )),
        LocalResult::None => Err(SwissephError::datetime_parsing(
            input,
            "local time falls into a daylight saving gap",
        )),
    }
}

fn parse_date_time(input: &str, tz: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Ok(date_time.with_timezone(&Utc));
    }

    let zone = parse_zone(tz)?;

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| SwissephError::datetime_parsing(input, "unrecognised date/time format"))?;

    match zone {
        InputZone::Fixed(offset) => localize(&offset, &naive, input),
        InputZone::Named(named) => localize(&named, &naive, input),
    }
}
