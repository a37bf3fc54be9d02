//! Digital channel (device input) export.

use std::io::Write;

use anyhow::Result;

use super::record::{EpicsRecord, RecordType};
use crate::config::{ASYN_PORT, BASE_MACRO, LATCHED_SUFFIX, SCAN_PERIOD};
use crate::storage::DeviceInputView;

/// Writes one live/latched `bi` record pair per device input, in query order.
///
/// The sink is consumed: it is flushed and closed when the pass completes.
/// Returns the number of records written.
pub fn export_device_inputs<W: Write>(mut sink: W, inputs: &[DeviceInputView]) -> Result<usize> {
    let mut written = 0;

    for input in inputs {
        let desc = format!(
            "Crate[{}], Card[{}], Channel[{}]",
            input.crate_number, input.card_number, input.channel_number
        );
        let link = |tag: &str| format!("@asynMask({ASYN_PORT} {} 1 0){tag}", input.id);

        EpicsRecord::new(
            RecordType::BinaryInput,
            format!("{BASE_MACRO}:{}", input.channel_name),
        )
        .field("DESC", desc.as_str())
        .field("DTYP", "asynUInt32Digital")
        .field("SCAN", SCAN_PERIOD)
        .field("ZNAM", input.z_name.as_str())
        .field("ONAM", input.o_name.as_str())
        .field("INP", link("DEVICE_INPUT"))
        .write_to(&mut sink)?;

        // Same channel, latched fault value. Built as its own field list
        // rather than by patching entries of the live record's.
        EpicsRecord::new(
            RecordType::BinaryInput,
            format!("{BASE_MACRO}:{}{LATCHED_SUFFIX}", input.channel_name),
        )
        .field("DESC", format!("{desc} Latched"))
        .field("DTYP", "asynUInt32Digital")
        .field("SCAN", SCAN_PERIOD)
        .field("ZNAM", input.z_name.as_str())
        .field("ONAM", input.o_name.as_str())
        .field("INP", link("DEVICE_INPUT_LATCHED"))
        .write_to(&mut sink)?;

        written += 2;
    }

    sink.flush()?;
    Ok(written)
}
