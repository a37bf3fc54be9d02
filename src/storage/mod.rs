// storage/mod.rs
// Read-only access to the MPS configuration database

pub mod models;
pub mod pool;
pub mod queries;

// Re-export commonly used items
pub use models::{
    AnalogDeviceView, BeamClassView, DeviceInputView, DeviceStateView, FaultView,
    MitigationDeviceView,
};
pub use pool::{init_db_pool, DbPool};
pub use queries::{
    fetch_analog_devices, fetch_beam_classes, fetch_device_inputs, fetch_faults,
    fetch_mitigation_devices,
};
