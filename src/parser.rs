//! Parsing of swetest `gPPP` output into typed results
//!
//! Each output line is split on the column delimiter and matched against the
//! property sequence the command was built with. Planet rows carry every
//! requested property; house rows omit the house number column, so a line with
//! fewer parts than the sequence is read as a house row.

use tracing::{debug, trace};

use crate::codes::{Body, HousePoint, Property};
use crate::constants::COLUMN_DELIMITER;
use crate::error::{Result, SwissephError};
use crate::models::{HouseResult, PlanetResult, PropertyValue, Request, ResultFrame, Value};

/// Parser for delimited swetest output
pub struct OutputParser;

/// Columns that precede the property values: index and name
const LEADING_COLUMNS: usize = 2;

impl OutputParser {
    /// Parse output lines produced by the command in `request`
    pub fn parse(lines: &[String], request: &Request) -> Result<ResultFrame> {
        let sequence = request.properties.as_slice();
        let mut planets = Vec::new();
        let mut houses = Vec::new();

        for line in lines {
            let parts: Vec<&str> = line.split(COLUMN_DELIMITER).collect();

            if parts.len() < sequence.len() {
                houses.push(parse_house_row(line, &parts, sequence)?);
            } else {
                planets.push(parse_planet_row(line, &parts, sequence)?);
            }
        }

        debug!(
            "Parsed {} planet rows and {} house rows from {} lines",
            planets.len(),
            houses.len(),
            lines.len()
        );

        let context = &request.context;
        Ok(ResultFrame {
            place: context.place.clone(),
            date: context.date,
            longitude: context.longitude,
            latitude: context.latitude,
            house_system: context.house_system,
            planets,
            houses,
        })
    }
}

fn parse_planet_row(line: &str, parts: &[&str], sequence: &[Property]) -> Result<PlanetResult> {
    let code = parts.first().map(|part| part.trim()).unwrap_or_default();
    let body = code
        .parse::<i32>()
        .ok()
        .and_then(Body::from_code)
        .ok_or_else(|| SwissephError::UnknownBody {
            code: code.to_string(),
            line: line.to_string(),
        })?;

    let mut properties = Vec::new();
    let mut column = LEADING_COLUMNS;

    for &property in sequence.iter().skip(LEADING_COLUMNS) {
        if column >= parts.len() {
            break;
        }

        let width = property.column_width();
        let end = (column + width).min(parts.len());
        let columns = &parts[column..end];
        column += width;

        let value = if width == 1 {
            Value::Single(columns[0].trim().to_string())
        } else {
            Value::Multi(columns.iter().map(|part| part.trim().to_string()).collect())
        };
        properties.push(PropertyValue { property, value });
    }

    trace!("Planet row {} with {} properties", body.name(), properties.len());
    Ok(PlanetResult { body, properties })
}

fn parse_house_row(line: &str, parts: &[&str], sequence: &[Property]) -> Result<HouseResult> {
    let code = parts.first().map(|part| part.trim()).unwrap_or_default();
    let house = code.parse::<HousePoint>().map_err(|_| SwissephError::UnknownHouse {
        code: code.to_string(),
        line: line.to_string(),
    })?;

    let properties: Vec<PropertyValue> = sequence
        .iter()
        .skip(LEADING_COLUMNS)
        .zip(parts.iter().skip(LEADING_COLUMNS))
        .map(|(&property, part)| PropertyValue {
            property,
            value: Value::Single(part.trim().to_string()),
        })
        .collect();

    trace!("House row {} with {} properties", house.name(), properties.len());
    Ok(HouseResult { house, properties })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CommandBuilder;
    use crate::codes::HouseSystem;
    use chrono::{TimeZone, Utc};

    fn request_with(properties: &[Property], houses: bool) -> Request {
        let mut builder = CommandBuilder::default()
            .set_date_time(Utc.with_ymd_and_hms(2025, 3, 23, 20, 21, 0).unwrap())
            .set_location(17.038538, 51.107883, Some("Wroclaw"), 0.0)
            .with_properties(properties.iter().copied());
        if houses {
            builder = builder.with_houses(Some(HouseSystem::Koch));
        }
        builder.build()
    }

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_parse_planet_row() {
        let request = request_with(&[], false);
        let frame = OutputParser::parse(
            &lines(&["0PPPSun PPP3.4519333PPP0.9918181"]),
            &request,
        )
        .unwrap();

        assert_eq!(frame.planets.len(), 1);
        let sun = &frame.planets[0];
        assert_eq!(sun.body, Body::Sun);
        assert_eq!(sun.properties.len(), 2);
        assert_eq!(
            sun.get(Property::LongitudeDecimal),
            Some(&Value::Single("3.4519333".to_string()))
        );
        assert_eq!(
            sun.get(Property::SpeedLongitudeDecimal),
            Some(&Value::Single("0.9918181".to_string()))
        );
        assert!(frame.houses.is_empty());
    }

    #[test]
    fn test_row_classification_boundary() {
        // Sequence pPlsGgj has seven entries.
        let request = request_with(&[], true);
        let frame = OutputParser::parse(
            &lines(&[
                "1PPPMoonPPP10.5PPP13.1PPP5PPP5.2PPP1.17",
                "1PPPhouse  1PPP217.98PPP0PPP0PPP0",
            ]),
            &request,
        )
        .unwrap();

        assert_eq!(frame.planets.len(), 1);
        assert_eq!(frame.planets[0].body, Body::Moon);
        assert_eq!(frame.planets[0].properties.len(), 5);

        assert_eq!(frame.houses.len(), 1);
        let house = &frame.houses[0];
        assert_eq!(house.house, HousePoint::House1);
        assert_eq!(house.properties.len(), 4);
        assert!(house.get(Property::HouseNumberDecimal).is_none());
    }

    #[test]
    fn test_extra_planet_columns_are_ignored() {
        let request = request_with(&[], false);
        let frame =
            OutputParser::parse(&lines(&["4PPPMarsPPP1PPP2PPP3PPP4"]), &request).unwrap();

        assert_eq!(frame.planets[0].properties.len(), 2);
    }

    #[test]
    fn test_multi_column_property() {
        let request = request_with(&[Property::NodesMeanLongitude, Property::LatitudeDecimal], false);
        let frame = OutputParser::parse(
            &lines(&["2PPPMercuryPPP10PPP1PPP48.3PPP228.3PPP-2.1"]),
            &request,
        )
        .unwrap();

        let mercury = frame.planet(Body::Mercury).unwrap();
        assert_eq!(
            mercury.get(Property::NodesMeanLongitude),
            Some(&Value::Multi(vec!["48.3".to_string(), "228.3".to_string()]))
        );
        assert_eq!(
            mercury.get(Property::LatitudeDecimal),
            Some(&Value::Single("-2.1".to_string()))
        );
    }

    #[test]
    fn test_truncated_multi_column_keeps_present_columns() {
        let request = request_with(&[Property::CoordinatesEcliptical], false);
        let frame = OutputParser::parse(
            &lines(&["3PPPVenusPPP10PPP1PPP0.1PPP0.2"]),
            &request,
        )
        .unwrap();

        let venus = frame.planet(Body::Venus).unwrap();
        assert_eq!(
            venus.get(Property::CoordinatesEcliptical),
            Some(&Value::Multi(vec!["0.1".to_string(), "0.2".to_string()]))
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let request = request_with(&[], false);
        let frame = OutputParser::parse(
            &lines(&[" 0 PPPSunPPP  3.45 PPP 0.99"]),
            &request,
        )
        .unwrap();

        let sun = frame.planet(Body::Sun).unwrap();
        assert_eq!(
            sun.get(Property::LongitudeDecimal).and_then(Value::as_str),
            Some("3.45")
        );
    }

    #[test]
    fn test_unknown_body() {
        let request = request_with(&[], false);
        let err = OutputParser::parse(&lines(&["99PPPFooPPP1PPP2"]), &request).unwrap_err();

        assert!(matches!(
            err,
            SwissephError::UnknownBody { ref code, ref line } if code == "99" && line == "99PPPFooPPP1PPP2"
        ));
    }

    #[test]
    fn test_unknown_house() {
        let request = request_with(&[], true);
        let err = OutputParser::parse(&lines(&["21PPPhouse 21PPP1"]), &request).unwrap_err();

        assert!(matches!(err, SwissephError::UnknownHouse { ref code, .. } if code == "21"));
    }

    #[test]
    fn test_frame_carries_request_context() {
        let request = request_with(&[], true);
        let frame = OutputParser::parse(&[], &request).unwrap();

        assert_eq!(frame.place, "Wroclaw");
        assert_eq!(frame.longitude, 17.038538);
        assert_eq!(frame.latitude, 51.107883);
        assert_eq!(frame.house_system, Some(HouseSystem::Koch));
        assert_eq!(frame.date, Utc.with_ymd_and_hms(2025, 3, 23, 20, 21, 0).unwrap());
        assert!(frame.planets.is_empty());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let request = request_with(&[], false);
        let frame = OutputParser::parse(
            &lines(&["1PPPMoonPPP1PPP2", "0PPPSunPPP3PPP4", "1PPPMoonPPP5PPP6"]),
            &request,
        )
        .unwrap();

        let bodies: Vec<Body> = frame.planets.iter().map(|p| p.body).collect();
        assert_eq!(bodies, vec![Body::Moon, Body::Sun, Body::Moon]);
        assert_eq!(
            frame.planet(Body::Moon).unwrap().get(Property::LongitudeDecimal),
            Some(&Value::Single("1".to_string()))
        );
    }
}
