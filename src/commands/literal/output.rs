//! Output formatting for literal command results.

use crate::output::Outputable;
use super::execute::LiteralResult;

impl Outputable for LiteralResult {
    fn to_text(&self) -> String {
        self.literal.clone()
    }
}
