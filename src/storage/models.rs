//! Flattened view records handed to the exporters.
//!
//! The exporters never walk channel → card → crate relationships themselves;
//! the query layer resolves them into these plain structs so the rendering
//! code is independent of the persistence schema.

/// A digital channel's fault-input mapping, with the crate/card/channel
/// numbers already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInputView {
    /// Device input identifier (the asyn address).
    pub id: i64,
    /// Channel name; becomes the record name after the `$(BASE):` prefix.
    pub channel_name: String,
    /// Label for the channel's zero state.
    pub z_name: String,
    /// Label for the channel's one state.
    pub o_name: String,
    /// Crate number for the DESC field.
    pub crate_number: i64,
    /// Card number for the DESC field.
    pub card_number: i64,
    /// Channel number for the DESC field.
    pub channel_number: i64,
}

/// One threshold state of an analog device's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceStateView {
    /// State name, appended to the channel name in the record name.
    pub name: String,
    /// State value, used as the asyn input link bit mask.
    pub value: i64,
}

/// An analog device together with its type's ordered threshold states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogDeviceView {
    /// Analog device identifier (the asyn address).
    pub id: i64,
    /// Analog channel name.
    pub channel_name: String,
    /// Crate number for the DESC field.
    pub crate_number: i64,
    /// Card number for the DESC field.
    pub card_number: i64,
    /// Channel number for the DESC field.
    pub channel_number: i64,
    /// Threshold states in the device type's defined order.
    pub states: Vec<DeviceStateView>,
}

/// A mitigation device (actuator) whose record reports the allowed beam class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MitigationDeviceView {
    /// Mitigation device identifier (the asyn address).
    pub id: i64,
    /// Device name; upper-cased to form the record name.
    pub name: String,
}

/// A beam class severity tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeamClassView {
    /// Class number; also the record's initialization value.
    pub number: i64,
    /// Human-readable description for the DESC field.
    pub description: String,
}

/// A digital fault condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultView {
    /// Fault identifier (the asyn address).
    pub id: i64,
    /// Fault name; becomes the record name after the `$(BASE):` prefix.
    pub name: String,
    /// Human-readable description for the DESC field.
    pub description: String,
}
