//! The command grammar typed at the session prompt.

use clap::{Parser, Subcommand, ValueEnum};
use docket_core::controller::Edit;
use docket_core::schema::{DraftField, ItemField};
use docket_export::layout::Layout;

#[derive(Debug, Parser)]
#[command(
    name = "docket",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Set a receipt field, e.g. `set recipientName Acme Corp`
    Set {
        field: DraftField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Set a field of one item (zero-based), e.g. `item 0 quantity 4`
    Item {
        index: usize,
        field: ItemField,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Append an empty item
    Add,
    /// Remove the item at an index (the last item is kept)
    #[command(alias = "rm")]
    Remove { index: usize },
    /// Start over with an empty receipt dated today
    Reset,
    /// Show the preview
    Show,
    /// Switch layout: classic, modern or minimal
    Layout { layout: Layout },
    /// Send the receipt to the printer
    Print,
    /// Export the receipt
    Export {
        #[arg(value_enum, default_value_t = ExportFormat::Pdf)]
        format: ExportFormat,
    },
    /// List commands
    Help,
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Html,
}

impl Command {
    /// The draft edit this command stands for, if any.
    pub fn as_edit(&self) -> Option<Edit> {
        match self {
            Command::Set { field, value } => Some(Edit::UpdateField {
                field: *field,
                value: join_value(value),
            }),
            Command::Item {
                index,
                field,
                value,
            } => Some(Edit::UpdateItem {
                index: *index,
                field: *field,
                value: join_value(value),
            }),
            Command::Add => Some(Edit::AddItem),
            Command::Remove { index } => Some(Edit::RemoveItem { index: *index }),
            Command::Reset => Some(Edit::Reset),
            _ => None,
        }
    }
}

/// Parse one prompt line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> eyre::Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = split_words(trimmed)?;
    let parsed = Line::try_parse_from(words).map_err(|e| eyre::eyre!("{}", e.render()))?;
    Ok(Some(parsed.command))
}

pub fn help_text() -> &'static str {
    "\
set <field> <value...>          set a receipt field (empty value clears it)
item <index> <field> <value...> set partNumber, description or quantity of an item
add                             append an empty item
remove <index>                  remove an item (the last one is kept)
reset                           start over
show                            show the preview
layout <classic|modern|minimal> switch layout
print                           send the receipt to the printer
export [pdf|docx|html]          export the receipt
quit                            end the session

fields: date recipientName recipientAddress deliveryNoteNumber deliveredBy
        contactInfo orderReference specialInstructions
values: use \\n for a line break; quote to keep spacing"
}

// Words joined by single spaces; `\n` becomes a line break.
fn join_value(words: &[String]) -> String {
    words.join(" ").replace("\\n", "\n")
}

/// Split on whitespace, honouring single and double quotes.
fn split_words(line: &str) -> eyre::Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(eyre::eyre!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
