use crate::converter::Case;
use crate::error::Result;

use serde::{Deserialize, Serialize};

/// Settings for one conversion run
///
/// Every field has a default, so a config file may set any subset of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Allow nullable elements in list fields
    pub loose: bool,

    /// If not empty, add this NOT NULL TIMESTAMP column to tables that lack it
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_column_name: String,

    /// If not empty, add this NOT NULL TIMESTAMP column to tables that lack it
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_column_name: String,

    /// Table name casing: "snake", "lowercamel", "uppercamel" or "" for no conversion
    pub table_case: String,

    /// Column name casing: "snake", "lowercamel", "uppercamel" or "" for no conversion
    pub column_case: String,
}

/// Values given on the command line; `None` leaves the config value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub loose: bool,
    pub created_column_name: Option<String>,
    pub updated_column_name: Option<String>,
    pub table_case: Option<String>,
    pub column_case: Option<String>,
}

impl ConverterConfig {
    /// Check that both casing settings are recognised
    pub fn validate(&self) -> Result<()> {
        self.table_case()?;
        self.column_case()?;
        Ok(())
    }

    pub fn table_case(&self) -> Result<Case> {
        Case::parse_setting("table", &self.table_case)
    }

    pub fn column_case(&self) -> Result<Case> {
        Case::parse_setting("column", &self.column_case)
    }

    /// Apply command-line values on top of this config
    pub fn merge_cli(mut self, overrides: ConfigOverrides) -> Self {
        // a flag can only switch loose mode on
        self.loose |= overrides.loose;
        if let Some(name) = overrides.created_column_name {
            self.created_column_name = name;
        }
        if let Some(name) = overrides.updated_column_name {
            self.updated_column_name = name;
        }
        if let Some(case) = overrides.table_case {
            self.table_case = case;
        }
        if let Some(case) = overrides.column_case {
            self.column_case = case;
        }
        self
    }
}
