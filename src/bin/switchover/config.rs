//! Input values gathered from arguments, environment, and a TOML file.
//!
//! Arguments and environment variables are handled by clap; the config file
//! fills in whatever neither of them set.

use std::{fs, path::Path, path::PathBuf};

use clap::Args;
use dual_fuel_models::models::hvac::switchover::{InputError, SwitchoverInput};
use serde::Deserialize;
use thiserror::Error;

/// The seven calculation inputs as given on the command line or in the environment.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct InputArgs {
    /// Heat pump COP measured at t1
    #[arg(long, env = "SWITCHOVER_COP_AT_T1", value_name = "COP")]
    pub cop_at_t1: Option<f64>,

    /// Heat pump COP measured at t2
    #[arg(long, env = "SWITCHOVER_COP_AT_T2", value_name = "COP")]
    pub cop_at_t2: Option<f64>,

    /// First rating temperature, in °F (conventionally 17)
    #[arg(
        long,
        env = "SWITCHOVER_T1",
        value_name = "°F",
        allow_negative_numbers = true
    )]
    pub t1: Option<f64>,

    /// Second rating temperature, in °F (conventionally 47)
    #[arg(
        long,
        env = "SWITCHOVER_T2",
        value_name = "°F",
        allow_negative_numbers = true
    )]
    pub t2: Option<f64>,

    /// Gas price per therm
    #[arg(long, env = "SWITCHOVER_COST_GAS_PER_UNIT", value_name = "PRICE")]
    pub cost_gas_per_unit: Option<f64>,

    /// Electricity price per kWh
    #[arg(long, env = "SWITCHOVER_COST_ELEC_PER_UNIT", value_name = "PRICE")]
    pub cost_elec_per_unit: Option<f64>,

    /// Furnace efficiency as a fraction in (0, 1]
    #[arg(long, env = "SWITCHOVER_FURNACE_EFFICIENCY", value_name = "FRACTION")]
    pub furnace_efficiency: Option<f64>,
}

/// Contents of a `--config` file.
///
/// Keys match the long option names:
///
/// ```toml
/// cop-at-t1 = 2.56
/// cop-at-t2 = 3.72
/// t1 = 17
/// t2 = 47
/// cost-gas-per-unit = 1.06
/// cost-elec-per-unit = 0.125
/// furnace-efficiency = 0.90
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub cop_at_t1: Option<f64>,
    pub cop_at_t2: Option<f64>,
    pub t1: Option<f64>,
    pub t2: Option<f64>,
    pub cost_gas_per_unit: Option<f64>,
    pub cost_elec_per_unit: Option<f64>,
    pub furnace_efficiency: Option<f64>,
}

/// Errors while assembling the inputs.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("missing --{option}: pass it as an argument, set {env}, or add it to the config file")]
    Missing {
        option: &'static str,
        env: &'static str,
    },
}

impl FileConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved inputs, every value present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub cop_at_t1: f64,
    pub cop_at_t2: f64,
    pub t1: f64,
    pub t2: f64,
    pub cost_gas_per_unit: f64,
    pub cost_elec_per_unit: f64,
    pub furnace_efficiency: f64,
}

impl Resolved {
    /// Merges arguments over the config file, naming the first missing value.
    pub fn merge(args: &InputArgs, file: &FileConfig) -> Result<Self, ConfigError> {
        let pick = |arg: Option<f64>,
                    from_file: Option<f64>,
                    option: &'static str,
                    env: &'static str| {
            arg.or(from_file)
                .ok_or(ConfigError::Missing { option, env })
        };

        Ok(Self {
            cop_at_t1: pick(
                args.cop_at_t1,
                file.cop_at_t1,
                "cop-at-t1",
                "SWITCHOVER_COP_AT_T1",
            )?,
            cop_at_t2: pick(
                args.cop_at_t2,
                file.cop_at_t2,
                "cop-at-t2",
                "SWITCHOVER_COP_AT_T2",
            )?,
            t1: pick(args.t1, file.t1, "t1", "SWITCHOVER_T1")?,
            t2: pick(args.t2, file.t2, "t2", "SWITCHOVER_T2")?,
            cost_gas_per_unit: pick(
                args.cost_gas_per_unit,
                file.cost_gas_per_unit,
                "cost-gas-per-unit",
                "SWITCHOVER_COST_GAS_PER_UNIT",
            )?,
            cost_elec_per_unit: pick(
                args.cost_elec_per_unit,
                file.cost_elec_per_unit,
                "cost-elec-per-unit",
                "SWITCHOVER_COST_ELEC_PER_UNIT",
            )?,
            furnace_efficiency: pick(
                args.furnace_efficiency,
                file.furnace_efficiency,
                "furnace-efficiency",
                "SWITCHOVER_FURNACE_EFFICIENCY",
            )?,
        })
    }

    /// Validates the values as model input.
    pub fn to_input(self) -> Result<SwitchoverInput, InputError> {
        SwitchoverInput::new(
            self.cop_at_t1,
            self.cop_at_t2,
            self.t1,
            self.t2,
            self.cost_gas_per_unit,
            self.cost_elec_per_unit,
            self.furnace_efficiency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = r#"
        cop-at-t1 = 2.56
        cop-at-t2 = 3.72
        t1 = 17.0
        t2 = 47.0
        cost-gas-per-unit = 1.06
        cost-elec-per-unit = 0.125
        furnace-efficiency = 0.90
    "#;

    #[test]
    fn parses_kebab_case_keys() {
        let file = FileConfig::parse(REFERENCE).unwrap();

        assert_eq!(file.cop_at_t1, Some(2.56));
        assert_eq!(file.cost_elec_per_unit, Some(0.125));
        assert_eq!(file.furnace_efficiency, Some(0.90));
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(FileConfig::parse("cop-at-t3 = 1.0").is_err());
    }

    #[test]
    fn accepts_integer_temperatures() {
        let file = FileConfig::parse("t1 = 17\nt2 = -5").unwrap();

        assert_eq!(file.t1, Some(17.0));
        assert_eq!(file.t2, Some(-5.0));
    }

    #[test]
    fn file_alone_is_enough() {
        let file = FileConfig::parse(REFERENCE).unwrap();
        let resolved = Resolved::merge(&InputArgs::default(), &file).unwrap();

        assert_eq!(resolved.t2, 47.0);
        assert!(resolved.to_input().is_ok());
    }

    #[test]
    fn arguments_override_file() {
        let file = FileConfig::parse(REFERENCE).unwrap();
        let args = InputArgs {
            cost_elec_per_unit: Some(0.20),
            ..InputArgs::default()
        };

        let resolved = Resolved::merge(&args, &file).unwrap();

        assert_eq!(resolved.cost_elec_per_unit, 0.20);
        assert_eq!(resolved.cost_gas_per_unit, 1.06);
    }

    #[test]
    fn missing_value_is_named() {
        let file = FileConfig {
            furnace_efficiency: None,
            ..FileConfig::parse(REFERENCE).unwrap()
        };

        let err = Resolved::merge(&InputArgs::default(), &file).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Missing {
                option: "furnace-efficiency",
                ..
            }
        ));
        assert!(err.to_string().contains("SWITCHOVER_FURNACE_EFFICIENCY"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FileConfig::load(Path::new("/nonexistent/switchover.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/switchover.toml"));
    }
}
