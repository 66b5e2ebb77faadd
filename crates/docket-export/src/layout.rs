use std::fmt;
use std::str::FromStr;

use docket_core::schema::DraftField;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::policy::{FieldPolicy, PolicyTable};

/// Visual variant of the receipt. All layouts share one template and one
/// projection; a layout only picks a stylesheet and a field policy table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Serif title, heavy rules, boxed recipient block.
    #[default]
    Classic,
    /// Sans-serif with a dark header band.
    Modern,
    /// Plain type, optional sections hidden when empty.
    Minimal,
}

impl Layout {
    pub const ALL: [Layout; 3] = [Layout::Classic, Layout::Modern, Layout::Minimal];

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Classic => "classic",
            Layout::Modern => "modern",
            Layout::Minimal => "minimal",
        }
    }

    pub fn stylesheet(self) -> &'static str {
        match self {
            Layout::Classic => include_str!("../templates/themes/classic.css"),
            Layout::Modern => include_str!("../templates/themes/modern.css"),
            Layout::Minimal => include_str!("../templates/themes/minimal.css"),
        }
    }

    pub fn policies(self) -> PolicyTable {
        match self {
            Layout::Classic | Layout::Modern => PolicyTable::always_show(),
            Layout::Minimal => PolicyTable::always_show()
                .with(DraftField::OrderReference, FieldPolicy::ShowOnlyIfPresent)
                .with(DraftField::DeliveredBy, FieldPolicy::ShowOnlyIfPresent)
                .with(DraftField::ContactInfo, FieldPolicy::ShowOnlyIfPresent)
                .with(DraftField::SpecialInstructions, FieldPolicy::ShowOnlyIfPresent),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExportError::UnknownLayout(s.to_string()))
    }
}
