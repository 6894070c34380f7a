//! High level entry point: build, run and parse in one call

use tracing::debug;

use crate::builder::CommandBuilder;
use crate::config::SwissephConfig;
use crate::error::Result;
use crate::executor::{CommandRunner, SwissephExecutor};
use crate::models::{Command, ResultFrame};
use crate::parser::OutputParser;

/// Swiss Ephemeris client bound to a configuration and a command runner
#[derive(Debug, Clone)]
pub struct Swisseph<R: CommandRunner = SwissephExecutor> {
    config: SwissephConfig,
    runner: R,
}

impl Swisseph<SwissephExecutor> {
    /// Client that spawns the configured swetest executable
    pub fn new(config: SwissephConfig) -> Self {
        let runner = SwissephExecutor::from_config(&config);
        Self { config, runner }
    }
}

impl<R: CommandRunner> Swisseph<R> {
    pub fn with_runner(config: SwissephConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &SwissephConfig {
        &self.config
    }

    /// Fresh builder seeded from this client's configuration
    pub fn builder(&self) -> CommandBuilder {
        CommandBuilder::new(&self.config)
    }

    /// Run the builder's command and parse its output
    pub async fn get(&self, builder: &CommandBuilder) -> Result<ResultFrame> {
        let request = builder.build();
        let lines = self.runner.run(&request.command).await?;
        let frame = OutputParser::parse(&lines, &request)?;
        debug!(
            "Result frame for {} with {} planets and {} houses",
            frame.place,
            frame.planets.len(),
            frame.houses.len()
        );
        Ok(frame)
    }

    /// The command that `get` would run, without running it
    pub fn cli_command(&self, builder: &CommandBuilder) -> Command {
        builder.build().command
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{Body, HousePoint, HouseSystem, Property};
    use crate::error::SwissephError;
    use crate::models::Value;
    use std::sync::Mutex;

    /// Runner returning canned lines and recording the commands it saw
    struct StubRunner {
        lines: Vec<String>,
        seen: Mutex<Vec<Command>>,
    }

    impl StubRunner {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|line| line.to_string()).collect(),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for StubRunner {
        async fn run(&self, command: &Command) -> Result<Vec<String>> {
            self.seen.lock().unwrap().push(command.clone());
            Ok(self.lines.clone())
        }
    }

    struct FailingRunner;

    impl CommandRunner for FailingRunner {
        async fn run(&self, _command: &Command) -> Result<Vec<String>> {
            Err(SwissephError::ProcessFailed {
                status: "exit status: 1".to_string(),
                stderr: "ephemeris file not found".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_get_builds_runs_and_parses() {
        let runner = StubRunner::new(&[
            "0PPPSunPPP3.45PPP0.99PPP330.1PPP300.5PPP11.02",
            "1PPPhouse  1PPP217.98PPP0PPP0PPP0",
        ]);
        let client = Swisseph::with_runner(SwissephConfig::default(), runner);
        let builder = client
            .builder()
            .set_location(17.038538, 51.107883, Some("Wroclaw"), 0.0)
            .with_houses(Some(HouseSystem::Koch));

        let frame = client.get(&builder).await.unwrap();

        assert_eq!(frame.place, "Wroclaw");
        assert_eq!(frame.planets.len(), 1);
        assert_eq!(
            frame.planet(Body::Sun).unwrap().get(Property::HouseNumberDecimal),
            Some(&Value::Single("11.02".to_string()))
        );
        assert_eq!(frame.houses.len(), 1);
        assert!(frame.house(HousePoint::House1).is_some());

        let seen = client.runner.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], client.cli_command(&builder));
    }

    #[tokio::test]
    async fn test_get_propagates_runner_errors() {
        let client = Swisseph::with_runner(SwissephConfig::default(), FailingRunner);
        let err = client.get(&client.builder()).await.unwrap_err();

        assert!(matches!(err, SwissephError::ProcessFailed { .. }));
    }

    #[tokio::test]
    async fn test_get_propagates_parse_errors() {
        let client = Swisseph::with_runner(
            SwissephConfig::default(),
            StubRunner::new(&["77PPPUnknownPPP1PPP2"]),
        );
        let err = client.get(&client.builder()).await.unwrap_err();

        assert!(matches!(err, SwissephError::UnknownBody { .. }));
    }

    #[test]
    fn test_cli_command_uses_client_config() {
        let config = SwissephConfig::default()
            .with_executable("/opt/swe/swetest")
            .with_ephemeris_dir("/opt/swe/ephe/");
        let client = Swisseph::new(config);
        let command = client.cli_command(&client.builder());

        assert_eq!(command.executable, "/opt/swe/swetest");
        assert!(command.contains("-edir/opt/swe/ephe"));
    }
}
