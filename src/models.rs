//! Core data structures shared by the command builder and the output parser.
//!
//! Defines the request side (location, observer, sidereal settings, the
//! built command and its property sequence) and the result side (planet and
//! house rows collected into a [`ResultFrame`]).

use crate::codes::{Body, HousePoint, HouseSystem, Property, Sidereal};
use crate::constants::{
    DEFAULT_ELEVATION, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PLACE, FLAG_MARKER,
};
use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Geographic location of the observer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    pub elevation: f64,
    pub place: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
            elevation: DEFAULT_ELEVATION,
            place: DEFAULT_PLACE.to_string(),
        }
    }
}

/// Where positions are computed from
///
/// Planetocentric carries its reference body, so a planetocentric observer
/// without a body cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observer {
    Geocentric,
    Heliocentric,
    Barycentric,
    /// Uses the builder's location and elevation
    Topocentric,
    Planetocentric(Body),
}

/// Plane onto which sidereal positions are projected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    None,
    EclipticPlane,
    SolarSystemPlane,
}

/// User defined ayanamsha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomSidereal {
    /// Reference date as Julian day
    pub julian_day: f64,
    /// Ayanamsha at the reference date, in degrees
    pub ayanamsha: f64,
    /// Whether `julian_day` is in UT rather than ephemeris time
    pub ayanamsha_in_ut: bool,
    pub projection: Projection,
}

impl CustomSidereal {
    pub fn new(julian_day: f64, ayanamsha: f64) -> Self {
        Self {
            julian_day,
            ayanamsha,
            ayanamsha_in_ut: true,
            projection: Projection::None,
        }
    }

    pub fn with_ayanamsha_in_ut(mut self, in_ut: bool) -> Self {
        self.ayanamsha_in_ut = in_ut;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}

/// Active sidereal zodiac settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SiderealSpec {
    Named {
        mode: Sidereal,
        projection: Projection,
    },
    Custom(CustomSidereal),
}

/// A swetest invocation: executable plus flag bodies without the marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub executable: String,
    pub arguments: Vec<String>,
}

impl Command {
    /// Arguments with the leading `-` marker, ready to pass to a process
    pub fn to_process_args(&self) -> Vec<String> {
        self.arguments
            .iter()
            .map(|arg| format!("{}{}", FLAG_MARKER, arg))
            .collect()
    }

    /// Whether any argument (with marker) equals `flag`
    pub fn contains(&self, flag: &str) -> bool {
        self.to_process_args().iter().any(|arg| arg == flag)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.executable)?;
        for arg in self.to_process_args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Ordered, deduplicated list of requested properties
///
/// Always starts with [`Property::DEFAULT_PREFIX`]. The same sequence is
/// encoded into the `-f` flag and replayed when parsing output rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySequence {
    properties: Vec<Property>,
}

impl Default for PropertySequence {
    fn default() -> Self {
        Self {
            properties: Property::DEFAULT_PREFIX.to_vec(),
        }
    }
}

impl PropertySequence {
    /// Append a property unless it is already present; returns whether it was added
    pub fn push(&mut self, property: Property) -> bool {
        if self.properties.contains(&property) {
            return false;
        }
        self.properties.push(property);
        true
    }

    pub fn contains(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    /// Properties added after the default prefix
    pub fn custom(&self) -> &[Property] {
        &self.properties[Property::DEFAULT_PREFIX.len()..]
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    /// Concatenated property codes as used by the `-f` flag
    pub fn codes(&self) -> String {
        self.properties.iter().map(|p| p.code()).collect()
    }
}

/// Request metadata copied into the result frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameContext {
    pub place: String,
    pub date: DateTime<Utc>,
    pub longitude: f64,
    pub latitude: f64,
    pub house_system: Option<HouseSystem>,
}

/// Frozen output of the command builder
///
/// Carries everything the parser needs, so the builder itself is no longer
/// involved once the command has been built.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub command: Command,
    pub properties: PropertySequence,
    pub context: FrameContext,
}

/// Decoded value of one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Single(String),
    Multi(Vec<String>),
}

impl Value {
    /// The value when it spans a single column
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Single(value) => Some(value),
            Value::Multi(_) => None,
        }
    }

    /// All columns of the value in order
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Value::Single(value) => vec![value.as_str()],
            Value::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// One property of a planet or house row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyValue {
    pub property: Property,
    pub value: Value,
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PropertyValue", 3)?;
        state.serialize_field("property", self.property.name())?;
        state.serialize_field("label", self.property.label())?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

fn find_property(properties: &[PropertyValue], property: Property) -> Option<&Value> {
    properties
        .iter()
        .find(|entry| entry.property == property)
        .map(|entry| &entry.value)
}

/// Decoded planet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetResult {
    pub body: Body,
    pub properties: Vec<PropertyValue>,
}

impl PlanetResult {
    pub fn get(&self, property: Property) -> Option<&Value> {
        find_property(&self.properties, property)
    }
}

impl Serialize for PlanetResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlanetResult", 3)?;
        state.serialize_field("index", &self.body.code())?;
        state.serialize_field("name", self.body.name())?;
        state.serialize_field("properties", &self.properties)?;
        state.end()
    }
}

/// Decoded house row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseResult {
    pub house: HousePoint,
    pub properties: Vec<PropertyValue>,
}

impl HouseResult {
    pub fn get(&self, property: Property) -> Option<&Value> {
        find_property(&self.properties, property)
    }
}

impl Serialize for HouseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HouseResult", 3)?;
        state.serialize_field("index", &self.house.code())?;
        state.serialize_field("name", self.house.name())?;
        state.serialize_field("properties", &self.properties)?;
        state.end()
    }
}

/// Everything decoded from one swetest run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultFrame {
    pub place: String,
    pub date: DateTime<Utc>,
    pub longitude: f64,
    pub latitude: f64,
    pub house_system: Option<HouseSystem>,
    pub planets: Vec<PlanetResult>,
    pub houses: Vec<HouseResult>,
}

impl ResultFrame {
    /// First planet row for `body`
    pub fn planet(&self, body: Body) -> Option<&PlanetResult> {
        self.planets.iter().find(|planet| planet.body == body)
    }

    /// First house row for `house`
    pub fn house(&self, house: HousePoint) -> Option<&HouseResult> {
        self.houses.iter().find(|row| row.house == house)
    }
}
