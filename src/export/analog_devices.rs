//! Analog device threshold export.
//!
//! Analog devices carry one threshold bit per device state (a BPM, for
//! example, has X, Y, and TMIT threshold bits). Each state becomes its own
//! `bi` record whose input link mask selects that state's bit.

use std::io::Write;

use anyhow::Result;
use log::warn;

use super::record::{EpicsRecord, RecordType};
use crate::config::{ASYN_PORT, BASE_MACRO, SCAN_PERIOD};
use crate::storage::AnalogDeviceView;

/// Writes one `bi` record per device state per analog device, in query order
/// with states in their defined order.
///
/// The sink is consumed: it is flushed and closed when the pass completes.
/// Returns the number of records written.
pub fn export_analog_devices<W: Write>(mut sink: W, devices: &[AnalogDeviceView]) -> Result<usize> {
    let mut written = 0;

    for device in devices {
        if device.states.is_empty() {
            // The schema promises a non-empty state list but does not enforce it
            warn!(
                "Analog device {} ({}) has no device states; no records emitted",
                device.id, device.channel_name
            );
            continue;
        }

        for state in &device.states {
            EpicsRecord::new(
                RecordType::BinaryInput,
                format!("{BASE_MACRO}:{}_{}", device.channel_name, state.name),
            )
            .field(
                "DESC",
                format!(
                    "Crate[{}], Card[{}], Channel[{}]",
                    device.crate_number, device.card_number, device.channel_number
                ),
            )
            .field("DTYP", "asynUInt32Digital")
            .field("SCAN", SCAN_PERIOD)
            .field("ZNAM", "IS_EXCEEDED")
            .field("ONAM", "IS_OK")
            .field(
                "INP",
                format!("@asynMask({ASYN_PORT} {} {} 0)ANALOG_DEVICE", device.id, state.value),
            )
            .write_to(&mut sink)?;

            written += 1;
        }
    }

    sink.flush()?;
    Ok(written)
}
