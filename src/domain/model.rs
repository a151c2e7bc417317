use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{
    validate_present_string, validate_required_field, validate_timestamp,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A physical location. Immutable once built; compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    city: String,
    state: String,
}

impl Address {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address{{city='{}', state='{}'}}", self.city, self.state)
    }
}

/// A person record whose state is fixed at construction.
///
/// The address list is copied in when the record is built and copied out on
/// every read, so no caller ever holds a handle onto the record's own storage.
/// Deserialization goes through [`EmployeeRecord`] and the same validation as
/// [`Employee::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    name: String,
    id: String,
    date_of_joining: DateTime<Utc>,
    addresses: Vec<Address>,
}

impl Employee {
    /// Validates the required fields and takes a private copy of `addresses`.
    ///
    /// Fails with [`RecordError::InvalidArgument`] when `name` or `id` is empty
    /// or `date_of_joining` is `None`; nothing is constructed in that case.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        date_of_joining: Option<DateTime<Utc>>,
        addresses: &[Address],
    ) -> Result<Self> {
        let name = name.into();
        let id = id.into();

        let date_of_joining = Self::check_required(&name, &id, &date_of_joining)
            .inspect_err(|e| tracing::warn!("Rejected employee record: {}", e))?;

        let employee = Self {
            name,
            id,
            date_of_joining,
            addresses: addresses.to_vec(),
        };

        tracing::debug!(
            id = %employee.id,
            addresses = employee.addresses.len(),
            "Employee record constructed"
        );
        Ok(employee)
    }

    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    fn check_required(
        name: &str,
        id: &str,
        date_of_joining: &Option<DateTime<Utc>>,
    ) -> Result<DateTime<Utc>> {
        validate_present_string("name", name)?;
        validate_present_string("id", id)?;
        validate_required_field("date_of_joining", date_of_joining).copied()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date_of_joining(&self) -> DateTime<Utc> {
        self.date_of_joining
    }

    /// Returns a fresh copy of the address list on every call.
    pub fn addresses(&self) -> Vec<Address> {
        self.addresses.clone()
    }

    pub fn address_count(&self) -> usize {
        self.addresses.len()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{name='{}', id='{}', date_of_joining={}, addresses=[",
            self.name,
            self.id,
            self.date_of_joining.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        for (i, address) in self.addresses.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", address)?;
        }
        f.write_str("]}")
    }
}

/// Step-by-step construction of an [`Employee`]; `build` applies the same
/// validation as [`Employee::new`].
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    name: Option<String>,
    id: Option<String>,
    date_of_joining: Option<DateTime<Utc>>,
    addresses: Vec<Address>,
}

impl EmployeeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn date_of_joining(mut self, date: DateTime<Utc>) -> Self {
        self.date_of_joining = Some(date);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn addresses(mut self, addresses: &[Address]) -> Self {
        self.addresses = addresses.to_vec();
        self
    }

    pub fn build(&self) -> Result<Employee> {
        let name = validate_required_field("name", &self.name)?;
        let id = validate_required_field("id", &self.id)?;
        Employee::new(name.as_str(), id.as_str(), self.date_of_joining, &self.addresses)
    }
}

/// Raw, unvalidated shape of an employee as it appears in roster files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub name: Option<String>,
    pub id: Option<String>,
    pub date_of_joining: Option<String>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = RecordError;

    fn try_from(record: EmployeeRecord) -> Result<Self> {
        let date_of_joining = record
            .date_of_joining
            .as_deref()
            .map(|text| validate_timestamp("date_of_joining", text))
            .transpose()?;

        Employee::new(
            record.name.unwrap_or_default(),
            record.id.unwrap_or_default(),
            date_of_joining,
            &record.addresses,
        )
    }
}
