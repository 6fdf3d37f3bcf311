use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Identifier for one of the built-in code templates.
///
/// The variant order is the catalog listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Echo,
    Commands,
    Buttons,
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateId::Echo => write!(f, "echo"),
            TemplateId::Commands => write!(f, "commands"),
            TemplateId::Buttons => write!(f, "buttons"),
        }
    }
}

impl FromStr for TemplateId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" => Ok(TemplateId::Echo),
            "commands" => Ok(TemplateId::Commands),
            "buttons" => Ok(TemplateId::Buttons),
            other => Err(format!("invalid template id: '{other}'")),
        }
    }
}

/// Discovery listing entry for a template.
///
/// `features` is descriptive metadata for catalog listings only; it never
/// drives template selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
}
