//! EPICS template exporters.
//!
//! Four independent single-pass exporters, one per output target. Each takes
//! an open writable sink and pre-resolved view records, writes one fixed
//! text block per record in query order, then flushes and closes the sink.

mod analog_devices;
mod device_inputs;
mod faults;
mod mitigation;
mod record;

pub use analog_devices::export_analog_devices;
pub use device_inputs::export_device_inputs;
pub use faults::export_faults;
pub use mitigation::export_mitigation_devices;
