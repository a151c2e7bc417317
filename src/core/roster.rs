use crate::config::RosterConfig;
use crate::domain::model::Employee;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A named, ordered collection of validated employee records.
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    name: String,
    description: Option<String>,
    employees: Vec<Employee>,
}

impl Roster {
    /// Builds every employee in the config, stopping at the first invalid entry.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        config.validate()?;

        let employees = config
            .employees
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Employee::try_from(record.clone())
                    .map_err(|e| e.scoped(&format!("employees[{}]", index)))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Loaded roster '{}' with {} employee(s)",
            config.roster.name,
            employees.len()
        );

        Ok(Self {
            name: config.roster.name.clone(),
            description: config.roster.description.clone(),
            employees,
        })
    }

    pub fn single(employee: Employee) -> Self {
        Self {
            name: employee.name().to_string(),
            description: None,
            employees: vec![employee],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => {
                let mut out = format!("# {} ({} employees)\n", self.name, self.employees.len());
                if let Some(description) = self.description() {
                    out.push_str(&format!("# {}\n", description));
                }
                for employee in &self.employees {
                    out.push_str(&employee.to_string());
                    out.push('\n');
                }
                Ok(out)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
