//! Mitigation device and beam class export.
//!
//! The output starts with two groups of initialization records (the beam
//! class count, then one record per beam class), followed by one `ai` record
//! per mitigation device reporting its currently allowed beam class.

use std::collections::HashSet;
use std::io::Write;

use anyhow::Result;
use log::warn;

use super::record::{EpicsRecord, RecordType};
use crate::config::{ALLOWED_CLASS_SUFFIX, ASYN_PORT, BASE_MACRO, SCAN_PERIOD};
use crate::storage::{BeamClassView, MitigationDeviceView};

/// Writes the beam class summary, per-class initialization records, and one
/// allowed-class record per mitigation device, in that order.
///
/// The sink is consumed: it is flushed and closed when the pass completes.
/// Returns the number of records written.
pub fn export_mitigation_devices<W: Write>(
    mut sink: W,
    devices: &[MitigationDeviceView],
    beam_classes: &[BeamClassView],
) -> Result<usize> {
    let mut written = 0;

    EpicsRecord::new(
        RecordType::AnalogOutput,
        format!("{BASE_MACRO}:NUM_BEAM_CLASSES"),
    )
    .field("DESC", "Number of beam classes")
    .field("PINI", "YES")
    .field("VAL", beam_classes.len().to_string())
    .write_to(&mut sink)?;
    written += 1;

    for beam_class in beam_classes {
        EpicsRecord::new(
            RecordType::AnalogOutput,
            format!("{BASE_MACRO}:BEAM_CLASS_{}", beam_class.number),
        )
        .field("DESC", beam_class.description.as_str())
        .field("PINI", "YES")
        .field("VAL", beam_class.number.to_string())
        .write_to(&mut sink)?;
        written += 1;
    }

    let mut seen_names: HashSet<String> = HashSet::new();
    for device in devices {
        let upper_name = device.name.to_uppercase();
        if !seen_names.insert(upper_name.clone()) {
            // Known edge case: names differing only in case collide after
            // upper-casing. Flagged, not fixed — both records are emitted.
            warn!(
                "Mitigation device {:?} collides with an earlier device after upper-casing",
                device.name
            );
        }

        EpicsRecord::new(
            RecordType::AnalogInput,
            format!("{BASE_MACRO}:{upper_name}{ALLOWED_CLASS_SUFFIX}"),
        )
        .field("DESC", format!("Mitigation Device: {}", device.name))
        .field("DTYP", "asynInt32")
        .field("SCAN", SCAN_PERIOD)
        .field(
            "INP",
            format!("@asyn({ASYN_PORT} {} 0)MITIGATION_DEVICE", device.id),
        )
        .write_to(&mut sink)?;
        written += 1;
    }

    sink.flush()?;
    Ok(written)
}
