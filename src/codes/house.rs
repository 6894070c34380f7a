//! House systems and the house points printed after the planet rows.

use std::str::FromStr;

use crate::error::SwissephError;

code_table! {
    /// House cusp or angular point printed in a house row
    pub enum HousePoint: u8 {
        House1 = 1 => "House 1",
        House2 = 2 => "House 2",
        House3 = 3 => "House 3",
        House4 = 4 => "House 4",
        House5 = 5 => "House 5",
        House6 = 6 => "House 6",
        House7 = 7 => "House 7",
        House8 = 8 => "House 8",
        House9 = 9 => "House 9",
        House10 = 10 => "House 10",
        House11 = 11 => "House 11",
        House12 = 12 => "House 12",
        Ascendant = 13 => "Ascendant",
        Midheaven = 14 => "Midheaven",
        Armc = 15 => "ARMC",
        Vertex = 16 => "Vertex",
        EquatorialAscendant = 17 => "Equatorial Ascendant",
        CoAscendantKoch = 18 => "Co-Ascendant (W. Koch)",
        CoAscendantMunkasey = 19 => "Co-Ascendant (M. Munkasey)",
        PolarAscendantMunkasey = 20 => "Polar Ascendant (M. Munkasey)",
    }
}

impl HousePoint {
    /// Display name of the house point
    pub fn name(self) -> &'static str {
        self.label()
    }

    /// True for the twelve cusps, false for the angular points
    pub fn is_cusp(self) -> bool {
        self.code() <= 12
    }
}

impl FromStr for HousePoint {
    type Err = SwissephError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(HousePoint::from_code)
            .ok_or_else(|| SwissephError::InvalidHousePoint {
                value: s.to_string(),
                expected: HousePoint::expected_codes(),
            })
    }
}

code_table! {
    /// House system letter passed as the last value of `-house`
    pub enum HouseSystem: &'static str {
        Equal = "A" => "Equal",
        Alcabitius = "B" => "Alcabitius",
        Campanus = "C" => "Campanus",
        EqualMc = "D" => "Equal (MC)",
        EqualAsc = "E" => "Equal (Ascendant)",
        CarterPoliEquatorial = "F" => "Carter poli-equatorial",
        Gauquelin = "G" => "Gauquelin sectors (36)",
        Horizon = "H" => "Horizon / Azimuth",
        Sunshine = "I" => "Sunshine",
        SunshineAlternative = "i" => "Sunshine (alternative)",
        Koch = "K" => "Koch",
        PullenSDelta = "L" => "Pullen SD (sinusoidal delta)",
        Morinus = "M" => "Morinus",
        /// Aries is the first house
        WholeSignAries = "N" => "Whole sign (Aries = 1st house)",
        Porphyry = "O" => "Porphyry",
        Placidus = "P" => "Placidus",
        PullenSRatio = "Q" => "Pullen SR (sinusoidal ratio)",
        Regiomontanus = "R" => "Regiomontanus",
        Sripati = "S" => "Sripati",
        PolichPage = "T" => "Polich/Page (topocentric)",
        KrusinskiPisaGoelzer = "U" => "Krusinski-Pisa-Goelzer",
        EqualVehlow = "V" => "Equal (Vehlow)",
        WholeSign = "W" => "Whole sign",
        AxialRotation = "X" => "Axial rotation / meridian",
        Apc = "Y" => "APC houses",
    }
}

impl Default for HouseSystem {
    fn default() -> Self {
        HouseSystem::Placidus
    }
}

impl FromStr for HouseSystem {
    type Err = SwissephError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HouseSystem::from_code(s).ok_or_else(|| SwissephError::InvalidHouseSystem {
            value: s.to_string(),
            expected: HouseSystem::expected_codes(),
        })
    }
}
