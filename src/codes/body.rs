//! Celestial bodies: the selection codes passed with `-p` and the body
//! indices swetest prints in the first output column.

use std::str::FromStr;

use crate::error::SwissephError;

code_table! {
    /// A body or group of bodies selectable with the `-p` flag
    pub enum BodySelection: &'static str {
        DefaultFactors = "d" => "Default planetary factors",
        DefaultFactorsAsteroids = "p" => "Default asteroid set",
        FictitiousFactors = "h" => "Fictitious / hypothetical bodies",
        AllFactors = "a" => "All available planetary factors",
        Sun = "0" => "Sun",
        Moon = "1" => "Moon",
        Mercury = "2" => "Mercury",
        Venus = "3" => "Venus",
        Mars = "4" => "Mars",
        Jupiter = "5" => "Jupiter",
        Saturn = "6" => "Saturn",
        Uranus = "7" => "Uranus",
        Neptune = "8" => "Neptune",
        Pluto = "9" => "Pluto",
        MeanNode = "m" => "Mean Node",
        TrueNode = "t" => "True Node",
        /// Lilith
        MeanApogee = "A" => "Mean Apogee (Lilith)",
        OsculatingApogee = "B" => "Osculating Apogee",
        Earth = "C" => "Earth",
        Chiron = "D" => "Chiron",
        Pholus = "E" => "Pholus",
        Ceres = "F" => "Ceres",
        Pallas = "G" => "Pallas",
        Juno = "H" => "Juno",
        Vesta = "I" => "Vesta",
        InterpolatedApogee = "c" => "Interpolated Apogee",
        InterpolatedPerigee = "g" => "Interpolated Perigee",
        PlanetCount = "?" => "Number of planets",
        Cupido = "J" => "Cupido",
        Hades = "K" => "Hades",
        Zeus = "L" => "Zeus",
        Kronos = "M" => "Kronos",
        Apollon = "N" => "Apollon",
        Admetos = "O" => "Admetos",
        Vulkanus = "P" => "Vulkanus",
        Poseidon = "Q" => "Poseidon",
        Isis = "R" => "Isis",
        Nibiru = "S" => "Nibiru",
        Harrington = "T" => "Harrington",
        NeptuneLeverrier = "U" => "Neptune (Leverrier)",
        NeptuneAdams = "V" => "Neptune (Adams)",
        PlutoLowell = "W" => "Pluto (Lowell)",
        PlutoPickering = "X" => "Pluto (Pickering)",
        Vulcan = "Y" => "Vulcan",
        /// White Moon
        Selena = "Z" => "Selena / White Moon",
        /// Waldemath's dark Moon
        Waldemath = "w" => "Waldemath's Dark Moon",
    }
}

impl FromStr for BodySelection {
    type Err = SwissephError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodySelection::from_code(s).ok_or_else(|| SwissephError::InvalidSelection {
            value: s.to_string(),
            expected: BodySelection::expected_codes(),
        })
    }
}

code_table! {
    /// Body identity as printed in the first column of a planet row
    pub enum Body: i32 {
        EclipticNutation = -1 => "Ecliptic / Nutation",
        Sun = 0 => "Sun",
        Moon = 1 => "Moon",
        Mercury = 2 => "Mercury",
        Venus = 3 => "Venus",
        Mars = 4 => "Mars",
        Jupiter = 5 => "Jupiter",
        Saturn = 6 => "Saturn",
        Uranus = 7 => "Uranus",
        Neptune = 8 => "Neptune",
        Pluto = 9 => "Pluto",
        MeanNode = 10 => "Mean Node",
        TrueNode = 11 => "True Node",
        MeanApogee = 12 => "Mean Apogee (Lilith)",
        OsculatingApogee = 13 => "Osculating Apogee",
        Earth = 14 => "Earth",
        Chiron = 15 => "Chiron",
        Pholus = 16 => "Pholus",
        Ceres = 17 => "Ceres",
        Pallas = 18 => "Pallas",
        Juno = 19 => "Juno",
        Vesta = 20 => "Vesta",
        InterpolatedApogee = 21 => "Interpolated Apogee",
        InterpolatedPerigee = 22 => "Interpolated Perigee",
        PlanetCount = 23 => "Planet count",
        Cupido = 40 => "Cupido",
        Hades = 41 => "Hades",
        Zeus = 42 => "Zeus",
        Kronos = 43 => "Kronos",
        Apollon = 44 => "Apollon",
        Admetos = 45 => "Admetos",
        Vulkanus = 46 => "Vulkanus",
        Poseidon = 47 => "Poseidon",
        Isis = 48 => "Isis",
        Nibiru = 49 => "Nibiru",
        Harrington = 50 => "Harrington",
        NeptuneLeverrier = 51 => "Neptune (Leverrier)",
        NeptuneAdams = 52 => "Neptune (Adams)",
        PlutoLowell = 53 => "Pluto (Lowell)",
        PlutoPickering = 54 => "Pluto (Pickering)",
        Vulcan = 55 => "Vulcan",
        Selena = 56 => "Selena / White Moon",
        Waldemath = 58 => "Waldemath",
    }
}

impl Body {
    /// Display name of the body
    pub fn name(self) -> &'static str {
        self.label()
    }

    /// Background notes for the hypothetical bodies
    pub fn additional_information(self) -> Option<&'static str> {
        match self {
            Body::Harrington => Some(
                "Another attempt to predict Planet X's orbit and position from perturbations \
                 in the orbits of Uranus and Neptune, published in The Astronomical Journal \
                 96(4), October 1988, p. 1476ff. Its precision is of the order of +/- 30 \
                 degrees; the planet may also lie in the opposite constellation. Mean solar \
                 distance about 100 AU, period about 1000 years.",
            ),
            Body::Nibiru => Some(
                "A highly speculative planet derived from the theory of Zecharia Sitchin, with \
                 elements supplied by Christian Woeltge, Hannover. It moves clockwise with a \
                 period of 3600 years on an extremely eccentric orbit, perihelion within the \
                 asteroid belt and aphelion at about 12 times the mean distance of Pluto.",
            ),
            Body::Vulcan => Some(
                "A hypothetical planet inside the orbit of Mercury (not identical to the \
                 Uranian planet Vulkanus). Orbital elements according to L.H. Weston. Its speed \
                 does not agree with the Kepler laws; it is too fast by 10 degrees per year.",
            ),
            Body::Selena => Some(
                "The White Moon, a hypothetical point opposite to the dark Moon. Its orbital \
                 elements follow the Selena tradition and it has never been observed.",
            ),
            Body::Waldemath => Some(
                "A hypothetical second Moon of the Earth postulated by Dr. Waldemath in the \
                 Monthly Weather Review 1/1898. Its distance from the Earth is 2.67 times the \
                 distance of the Moon, its daily motion about 3 degrees. It has never been \
                 confirmed.",
            ),
            _ => None,
        }
    }
}

impl FromStr for Body {
    type Err = SwissephError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(Body::from_code)
            .ok_or_else(|| SwissephError::InvalidBody {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_lookup() {
        assert_eq!("d".parse::<BodySelection>().unwrap(), BodySelection::DefaultFactors);
        assert_eq!("A".parse::<BodySelection>().unwrap(), BodySelection::MeanApogee);
        assert!(matches!(
            "xxx".parse::<BodySelection>(),
            Err(SwissephError::InvalidSelection { .. })
        ));
    }

    #[test]
    fn test_body_lookup() {
        assert_eq!(Body::from_code(0), Some(Body::Sun));
        assert_eq!(Body::from_code(-1), Some(Body::EclipticNutation));
        assert_eq!(Body::from_code(57), None);
        assert_eq!(" 4 ".parse::<Body>().unwrap(), Body::Mars);
        assert!("mars".parse::<Body>().is_err());
    }

    #[test]
    fn test_body_names() {
        assert_eq!(Body::Sun.name(), "Sun");
        assert_eq!(Body::MeanApogee.name(), "Mean Apogee (Lilith)");
        assert!(Body::Nibiru.additional_information().is_some());
        assert!(Body::Sun.additional_information().is_none());
    }
}
