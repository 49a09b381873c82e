//! Output formatting for types command results.

use crate::output::Outputable;
use super::execute::TypesResult;

impl Outputable for TypesResult {
    fn to_text(&self) -> String {
        let mut lines = Vec::new();

        if self.types.is_empty() {
            lines.push("No types found.".to_string());
            return lines.join("\n");
        }

        let width = self.types.iter().map(|t| t.name.len()).max().unwrap_or(0);
        lines.push(format!("{} type(s):", self.types.len()));
        for entry in &self.types {
            lines.push(format!("  {:<width$}  {}", entry.name, entry.family));
        }

        lines.join("\n")
    }
}
