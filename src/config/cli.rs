use crate::config::RosterConfig;
use crate::core::roster::{OutputFormat, Roster};
use crate::domain::model::{Address, Employee};
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_path, validate_timestamp, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "employee-record")]
#[command(about = "Build and display immutable employee records")]
pub struct CliConfig {
    /// TOML roster file; when absent the inline flags describe one employee
    #[arg(long)]
    pub roster: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub id: Option<String>,

    /// Date of joining, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[+offset]
    #[arg(long)]
    pub joined: Option<String>,

    /// Address as "City, ST"; repeat for several
    #[arg(long = "address")]
    pub addresses: Vec<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn parsed_addresses(&self) -> Result<Vec<Address>> {
        self.addresses.iter().map(|raw| parse_address(raw)).collect()
    }

    /// Loads the roster file when one is given, otherwise builds a
    /// single-employee roster from the inline flags.
    pub fn build_roster(&self) -> Result<Roster> {
        if let Some(path) = &self.roster {
            tracing::info!("📁 Loading roster from: {}", path);
            let roster_config = RosterConfig::from_file(path)?;
            return Roster::from_config(&roster_config);
        }

        let joined = self
            .joined
            .as_deref()
            .map(|text| validate_timestamp("joined", text))
            .transpose()?;

        let employee = Employee::new(
            self.name.clone().unwrap_or_default(),
            self.id.clone().unwrap_or_default(),
            joined,
            &self.parsed_addresses()?,
        )?;
        Ok(Roster::single(employee))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(roster) = &self.roster {
            return validate_path("roster", roster);
        }

        if self.name.is_none() {
            return Err(RecordError::invalid_argument(
                "name",
                "either --roster or --name must be given",
            ));
        }

        self.parsed_addresses().map(|_| ())
    }
}

/// Splits on the last comma so city names may themselves contain commas.
pub(crate) fn parse_address(raw: &str) -> Result<Address> {
    match raw.rsplit_once(',') {
        Some((city, state)) if !city.trim().is_empty() && !state.trim().is_empty() => {
            Ok(Address::new(city.trim(), state.trim()))
        }
        _ => Err(RecordError::invalid_argument(
            "address",
            format!("'{}' is not of the form \"City, ST\"", raw),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        let a = parse_address("Washington, D.C., DC").unwrap();
        assert_eq!(a.city(), "Washington, D.C.");
        assert_eq!(a.state(), "DC");
        assert!(parse_address("Nowhere").is_err());
        assert!(parse_address(", NY").is_err());
    }

    #[test]
    fn test_validate_requires_roster_or_name() {
        let config = CliConfig::parse_from(["employee-record"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["employee-record", "--roster", "staff.toml"]);
        assert!(config.validate().is_ok());

        let config = CliConfig::parse_from([
            "employee-record",
            "--name",
            "John",
            "--address",
            "New York, NY",
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(config.format, OutputFormat::Text);
    }

    fn invalid_field(result: Result<Roster>) -> String {
        match result {
            Err(RecordError::InvalidArgument { field, .. }) => field,
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_build_roster_inline() {
        let config = CliConfig::parse_from([
            "employee-record",
            "--name",
            "John Doe",
            "--id",
            "EMP123",
            "--joined",
            "2020-05-20T09:30:00",
            "--address",
            "New York, NY",
            "--address",
            "San Francisco, CA",
        ]);

        let roster = config.build_roster().unwrap();
        let john = roster.find("EMP123").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(john.address_count(), 2);
        assert_eq!(john.addresses()[1].city(), "San Francisco");
        assert_eq!(john.date_of_joining().to_rfc3339(), "2020-05-20T09:30:00+00:00");
    }

    #[test]
    fn test_build_roster_without_joined_rejects_date() {
        let config = CliConfig::parse_from(["employee-record", "--name", "John", "--id", "E1"]);
        assert_eq!(invalid_field(config.build_roster()), "date_of_joining");
    }

    #[test]
    fn test_build_roster_rejects_bad_inputs() {
        let bad_address = CliConfig::parse_from([
            "employee-record",
            "--name",
            "John",
            "--id",
            "E1",
            "--joined",
            "2020-05-20",
            "--address",
            "Nowhere",
        ]);
        assert_eq!(invalid_field(bad_address.build_roster()), "address");

        let bad_date = CliConfig::parse_from([
            "employee-record",
            "--name",
            "John",
            "--id",
            "E1",
            "--joined",
            "yesterday",
        ]);
        assert_eq!(invalid_field(bad_date.build_roster()), "joined");

        let no_id = CliConfig::parse_from([
            "employee-record",
            "--name",
            "John",
            "--joined",
            "2020-05-20",
        ]);
        assert_eq!(invalid_field(no_id.build_roster()), "id");
    }

    #[test]
    fn test_build_roster_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[roster]\nname = \"Branch\"\n\n[[employees]]\nname = \"Jane\"\nid = \"E2\"\ndate_of_joining = \"2021-01-04\"\n",
        )
        .unwrap();

        let config = CliConfig::parse_from([
            "employee-record",
            "--roster",
            path.to_str().unwrap(),
            "--format",
            "json",
        ]);
        let roster = config.build_roster().unwrap();
        assert_eq!(roster.name(), "Branch");
        assert_eq!(roster.find("E2").unwrap().name(), "Jane");
        assert_eq!(config.format, OutputFormat::Json);

        let missing = CliConfig::parse_from([
            "employee-record",
            "--roster",
            temp_dir.path().join("absent.toml").to_str().unwrap(),
        ]);
        assert_eq!(missing.build_roster().unwrap_err().exit_code(), 2);
    }
}
