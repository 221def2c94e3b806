use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatterConfig {
    /// Prefix added to each line of a nested operand.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_indent() -> String {
    "\t".to_string()
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}
