//! Shared record-block rendering.
//!
//! Every exporter funnels through [`EpicsRecord::write_to`], which emits one
//! fixed textual block per record:
//!
//! ```text
//! record(bi, "$(BASE):DIGIN0") {
//!   field(DESC, "Crate[1], Card[2], Channel[3]")
//!   ...
//! }
//! ```
//!
//! followed by a blank line. Names and values are written verbatim — no
//! quoting or escaping is performed, so source fields must not contain `"`
//! or newlines.

use std::io::{self, Write};

use strum_macros::EnumIter;

/// EPICS record types emitted by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum RecordType {
    /// Binary input (`bi`).
    BinaryInput,
    /// Analog input (`ai`).
    AnalogInput,
    /// Analog output (`ao`) — only the mitigation export's initialization
    /// records use this.
    AnalogOutput,
}

impl RecordType {
    /// The type token as it appears in the template file.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::BinaryInput => "bi",
            RecordType::AnalogInput => "ai",
            RecordType::AnalogOutput => "ao",
        }
    }
}

/// One record block: type, name, and an ordered field list.
///
/// Field order is significant — the downstream record-database generator
/// parses by position as well as by field name in some configurations.
#[derive(Debug)]
pub struct EpicsRecord {
    rec_type: RecordType,
    name: String,
    fields: Vec<(&'static str, String)>,
}

impl EpicsRecord {
    /// Starts a record block with no fields.
    pub fn new(rec_type: RecordType, name: impl Into<String>) -> Self {
        Self {
            rec_type,
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends one field; fields are written in the order they were added.
    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Writes the block followed by a blank line.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "record({}, \"{}\") {{", self.rec_type.as_str(), self.name)?;
        for (name, value) in &self.fields {
            writeln!(sink, "  field({}, \"{}\")", name, value)?;
        }
        writeln!(sink, "}}")?;
        writeln!(sink)
    }
}
