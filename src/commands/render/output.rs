//! Output formatting for render command results.

use crate::output::Outputable;
use super::execute::RenderResult;

impl Outputable for RenderResult {
    fn to_text(&self) -> String {
        self.script.trim_end_matches('\n').to_string()
    }
}
