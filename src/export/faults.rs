//! Fault export.

use std::io::Write;

use anyhow::Result;

use super::record::{EpicsRecord, RecordType};
use crate::config::{ASYN_PORT, BASE_MACRO, SCAN_PERIOD};
use crate::storage::FaultView;

/// Writes one `bi` record per fault, in query order.
///
/// The sink is consumed: it is flushed and closed when the pass completes.
/// Returns the number of records written.
pub fn export_faults<W: Write>(mut sink: W, faults: &[FaultView]) -> Result<usize> {
    let mut written = 0;

    for fault in faults {
        EpicsRecord::new(
            RecordType::BinaryInput,
            format!("{BASE_MACRO}:{}", fault.name),
        )
        .field("DESC", fault.description.as_str())
        .field("DTYP", "asynUInt32Digital")
        .field("SCAN", SCAN_PERIOD)
        .field("ZNAM", "OK")
        .field("ONAM", "FAULTED")
        .field(
            "INP",
            format!("@asynMask({ASYN_PORT} {} 1 0)FAULT", fault.id),
        )
        .write_to(&mut sink)?;
        written += 1;
    }

    sink.flush()?;
    Ok(written)
}
