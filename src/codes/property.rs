//! Output properties requested with the `-f` flag.
//!
//! The labels of `SS`/`ss` and of the distance/position family are taken
//! from the swetest help text as understood so far and have not been
//! verified against real output. Treat them as documentation; only the
//! codes and column widths drive behaviour.

use std::str::FromStr;

use crate::error::SwissephError;

code_table! {
    /// One column group of a swetest output row
    pub enum Property: &'static str {
        Year = "y" => "Year",
        YearFraction = "Y" => "Year with fraction (Y.xx)",
        PlanetIndex = "p" => "Planet index used by Swisseph",
        PlanetName = "P" => "Planet name",
        AbsoluteJulianDate = "J" => "Absolute Date in Julian format",
        DateDdMmYyyy = "T" => "Date formatted as DD.MM.YYYY",
        DateYymmdd = "t" => "Date formatted as YYMMDD",
        LongitudeDegree = "L" => "Longitude in degree ddd mm'ss",
        LongitudeDecimal = "l" => "Longitude decimal",
        LongitudeSign = "Z" => "Longitude ddsignmm'ss",
        SpeedLongitudeDegree = "S" => "Speed in longitude in degree ddd:mm:ss per day",
        SpeedAllDegree = "SS" => "Speed for all values specified in fmt",
        SpeedLongitudeDecimal = "s" => "Speed longitude decimal (degrees/day)",
        SpeedAllDecimal = "ss" => "Speed for all values specified in fmt (decimal)",
        LatitudeDegree = "B" => "Latitude degree",
        LatitudeDecimal = "b" => "Latitude decimal",
        DistanceAu = "R" => "Distance decimal in AU",
        DistanceAuMoon = "r" => "Distance decimal in AU, Moon in seconds parallax",
        DistanceLightYears = "W" => "Distance decimal in light years",
        DistanceKm = "w" => "Distance decimal in km",
        RelativeDistance = "q" => "Relative distance (1000=nearest, 0=furthest)",
        RightAscensionHms = "A" => "Right ascension in hh:mm:ss",
        RightAscensionDecimal = "a" => "Right ascension hours decimal",
        MeridianDistance = "m" => "Meridian distance",
        ZenithDistance = "z" => "Zenith distance",
        DeclinationDegree = "D" => "Declination degree",
        DeclinationDecimal = "d" => "Declination decimal",
        AzimuthDegree = "I" => "Azimuth degree",
        AzimuthDecimal = "i" => "Azimuth decimal",
        AltitudeDegree = "H" => "Altitude degree",
        AltitudeDecimal = "h" => "Altitude decimal",
        AltitudeRefractionDegree = "K" => "Altitude (with refraction) degree",
        AltitudeRefractionDecimal = "k" => "Altitude (with refraction) decimal",
        HousePositionDegrees = "G" => "House position in degrees",
        HousePositionDegreesDecimal = "g" => "House position in degrees decimal",
        HouseNumberDecimal = "j" => "House number 1.0 - 12.99999",
        CoordinatesEcliptical = "X" => "x-, y-, and z-coordinates ecliptical",
        CoordinatesEquatorial = "x" => "x-, y-, and z-coordinates equatorial",
        UnitVectorEcliptical = "U" => "Unit vector ecliptical",
        UnitVectorEquatorial = "u" => "Unit vector equatorial",
        NodesMeanLongitude = "n" => "Nodes (mean): ascending/descending (Me - Ne); longitude decimal",
        NodesOsculatingLongitude = "N" => "Nodes (osculating): ascending/descending, longitude; decimal",
        ApsidesMean = "f" => "Apsides (mean): perihelion, aphelion, second focal point; longitude dec.",
        ApsidesOsculating = "F" => "Apsides (osc.): perihelion, aphelion, second focal point; longitude dec.",
        PhaseAngle = "+" => "Phase angle",
        Phase = "-" => "Phase",
        Elongation = "*" => "Elongation",
        ApparentDiameter = "/" => "Apparent diameter of disc",
        Magnitude = "=" => "Magnitude",
    }
}

impl Property {
    /// Properties every request starts with, in order
    pub const DEFAULT_PREFIX: [Property; 4] = [
        Property::PlanetIndex,
        Property::PlanetName,
        Property::LongitudeDecimal,
        Property::SpeedLongitudeDecimal,
    ];

    /// Properties added by a house calculation
    pub const HOUSE_PROPERTIES: [Property; 3] = [
        Property::HousePositionDegrees,
        Property::HousePositionDegreesDecimal,
        Property::HouseNumberDecimal,
    ];

    /// Number of output columns this property occupies in one row
    pub fn column_width(self) -> usize {
        match self {
            Property::SpeedAllDegree
            | Property::SpeedAllDecimal
            | Property::CoordinatesEcliptical
            | Property::CoordinatesEquatorial
            | Property::UnitVectorEcliptical
            | Property::UnitVectorEquatorial
            | Property::ApsidesMean
            | Property::ApsidesOsculating => 3,
            Property::NodesMeanLongitude | Property::NodesOsculatingLongitude => 2,
            _ => 1,
        }
    }

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Property::Year => "year",
            Property::YearFraction => "year_fraction",
            Property::PlanetIndex => "planet_index",
            Property::PlanetName => "planet_name",
            Property::AbsoluteJulianDate => "absolute_jul_date",
            Property::DateDdMmYyyy => "date_dd_mm_yyyy",
            Property::DateYymmdd => "date_yymmdd",
            Property::LongitudeDegree => "longitude_degree",
            Property::LongitudeDecimal => "longitude_decimal",
            Property::LongitudeSign => "longitude_ddsignmmss",
            Property::SpeedLongitudeDegree => "speed_longitude_degree",
            Property::SpeedAllDegree => "speed_all_values_degree_fmt",
            Property::SpeedLongitudeDecimal => "speed_longitude_decimal",
            Property::SpeedAllDecimal => "speed_all_values_decimal_fmt",
            Property::LatitudeDegree => "latitude_degree",
            Property::LatitudeDecimal => "latitude_decimal",
            Property::DistanceAu => "distance_decimal_au",
            Property::DistanceAuMoon => "distance_decimal_au_moon",
            Property::DistanceLightYears => "distance_decimal_ly",
            Property::DistanceKm => "distance_decimal_km",
            Property::RelativeDistance => "relative_distance",
            Property::RightAscensionHms => "right_ascension",
            Property::RightAscensionDecimal => "right_ascension_hours_decimal",
            Property::MeridianDistance => "meridian_distance",
            Property::ZenithDistance => "zenith_distance",
            Property::DeclinationDegree => "declination_degree",
            Property::DeclinationDecimal => "declination_decimal",
            Property::AzimuthDegree => "azimuth_degree",
            Property::AzimuthDecimal => "azimuth_decimal",
            Property::AltitudeDegree => "altitude_degree",
            Property::AltitudeDecimal => "altitude_decimal",
            Property::AltitudeRefractionDegree => "altitude_refraction_degree",
            Property::AltitudeRefractionDecimal => "altitude_refraction_decimal",
            Property::HousePositionDegrees => "house_position_degrees",
            Property::HousePositionDegreesDecimal => "house_position_degrees_decimal",
            Property::HouseNumberDecimal => "house_number_decimal",
            Property::CoordinatesEcliptical => "coordinates_ecliptical",
            Property::CoordinatesEquatorial => "coordinates_equatorial",
            Property::UnitVectorEcliptical => "unit_vector_ecliptical",
            Property::UnitVectorEquatorial => "unit_vector_equatorial",
            Property::NodesMeanLongitude => "nodes_mean_longitude_decimal",
            Property::NodesOsculatingLongitude => "nodes_osculating_longitude_decimal",
            Property::ApsidesMean => "apsides_mean",
            Property::ApsidesOsculating => "apsides_osc",
            Property::PhaseAngle => "phase_angle",
            Property::Phase => "phase",
            Property::Elongation => "elongation",
            Property::ApparentDiameter => "apparent_diameter",
            Property::Magnitude => "magnitude",
        }
    }

    /// Whether this property belongs to the fixed default prefix
    pub fn is_default(self) -> bool {
        Self::DEFAULT_PREFIX.contains(&self)
    }
}

impl FromStr for Property {
    type Err = SwissephError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Property::from_code(s).ok_or_else(|| SwissephError::InvalidProperty {
            value: s.to_string(),
            expected: Property::expected_codes(),
        })
    }
}
