//! Integration tests for command building and the client facade
//!
//! Exercise the public API end to end with a stub runner that replays the
//! recorded Koch fixture instead of spawning swetest.

use chrono::{FixedOffset, TimeZone, Utc};
use swetest_bridge::{
    Body, BodySelection, Command, CommandBuilder, CommandRunner, CustomSidereal, EphOption,
    HouseSystem, Observer, Projection, Property, Result, Sidereal, Swisseph, SwissephConfig,
    SwissephError,
};

const FIXTURE: &str = include_str!("fixtures/swetest-koch.txt");

struct FixtureRunner;

impl CommandRunner for FixtureRunner {
    async fn run(&self, _command: &Command) -> Result<Vec<String>> {
        Ok(swetest_bridge::executor::split_output_lines(FIXTURE))
    }
}

fn config() -> SwissephConfig {
    SwissephConfig::default()
        .with_executable("/opt/swisseph/swetest")
        .with_ephemeris_dir("/opt/swisseph/ephe/")
}

/// Purpose: a fully configured request renders every flag in a fixed order
#[test]
fn test_command_flag_order() {
    let warsaw = FixedOffset::east_opt(3600).unwrap();
    let builder = CommandBuilder::new(&config())
        .set_date_time(warsaw.with_ymd_and_hms(2025, 3, 23, 21, 21, 0).unwrap())
        .set_location(17.038538, 51.107883, Some("Wroclaw"), 0.0)
        .select_bodies([BodySelection::DefaultFactors])
        .with_properties([Property::LatitudeDecimal, Property::DistanceAu])
        .with_houses(Some(HouseSystem::Koch))
        .with_custom_sidereal(CustomSidereal::new(2451545.0, 23.85))
        .set_observer(Observer::Planetocentric(Body::Earth))
        .with_eph_options([EphOption::NoAberration]);

    assert_eq!(
        builder.build().command.to_string(),
        "/opt/swisseph/swetest -edir/opt/swisseph/ephe -eswe -noaberr -nonut -true \
         -b23.03.2025 -ut20:21:00 -pd -house17.038538,51.107883,K \
         -sidudef2451545,23.85,jdisut -pc14 -fpPlsbRGgj -gPPP -head"
    );
}

/// Purpose: the configured default house system applies when none is given
#[test]
fn test_config_house_system_default() {
    let config = config().with_default_house_system(HouseSystem::Campanus);
    let command = CommandBuilder::new(&config).with_houses(None).build().command;

    assert!(command.contains("-house-0.001545,51.477928,C"));
}

/// Purpose: sidereal settings render in every supported shape
#[test]
fn test_sidereal_tokens() {
    let cases = [
        (CommandBuilder::default().with_sidereal(Sidereal::Lahiri, Projection::None), "-sid1"),
        (
            CommandBuilder::default().with_sidereal(Sidereal::Lahiri, Projection::EclipticPlane),
            "-sidt01",
        ),
        (
            CommandBuilder::default().with_sidereal(Sidereal::LahiriIcrc, Projection::SolarSystemPlane),
            "-sidsp46",
        ),
        (
            CommandBuilder::default().with_custom_sidereal(
                CustomSidereal::new(2415020.5, 22.46)
                    .with_ayanamsha_in_ut(false)
                    .with_projection(Projection::EclipticPlane),
            ),
            "-sidudef2415020.5,22.46,eclt0",
        ),
    ];

    for (builder, expected) in cases {
        assert!(builder.build().command.contains(expected), "missing {}", expected);
    }
}

/// Purpose: invalid raw codes fail with the code and the accepted domain
#[test]
fn test_invalid_codes_report_domain() {
    let err = CommandBuilder::default().select_bodies_code("xxx").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("xxx"));
    assert!(message.contains("d, p, h, a"));

    let err = CommandBuilder::default()
        .with_property_codes(["l", "?"])
        .unwrap_err();
    assert!(matches!(err, SwissephError::InvalidProperty { ref value, .. } if value == "?"));
}

/// Purpose: the facade builds, runs and parses in one call
#[tokio::test]
async fn test_client_get_with_fixture_runner() {
    let client = Swisseph::with_runner(config(), FixtureRunner);
    let builder = client
        .builder()
        .set_date_time(Utc.with_ymd_and_hms(2025, 3, 23, 20, 21, 0).unwrap())
        .set_location(17.038538, 51.107883, Some("Wroclaw"), 0.0)
        .with_houses(Some(HouseSystem::Koch));

    let frame = client.get(&builder).await.unwrap();

    assert_eq!(frame.planets.len(), 13);
    assert_eq!(frame.houses.len(), 20);
    assert_eq!(frame.place, "Wroclaw");
    assert_eq!(
        client.cli_command(&builder).executable,
        "/opt/swisseph/swetest"
    );
}
