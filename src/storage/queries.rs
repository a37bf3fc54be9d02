//! Queries against the MPS configuration schema.
//!
//! Each fetch resolves the relationship chain (channel → card → crate) in
//! SQL and returns flattened view records in primary-key order, which is the
//! export order.

use anyhow::Result;
use futures::TryStreamExt;
use sqlx::Row;

use super::models::{
    AnalogDeviceView, BeamClassView, DeviceInputView, DeviceStateView, FaultView,
    MitigationDeviceView,
};
use super::pool::DbPool;

/// Fetches all device inputs with their channel, card, and crate numbers
/// resolved.
pub async fn fetch_device_inputs(pool: &DbPool) -> Result<Vec<DeviceInputView>> {
    let mut rows = sqlx::query(
        "SELECT di.id, dc.name AS channel_name, dc.z_name, dc.o_name,
                dc.number AS channel_number, card.number AS card_number,
                cr.number AS crate_number
         FROM device_inputs di
         JOIN digital_channels dc ON dc.id = di.channel_id
         JOIN application_cards card ON card.id = dc.card_id
         JOIN crates cr ON cr.id = card.crate_id
         ORDER BY di.id",
    )
    .fetch(pool.as_ref());

    let mut inputs = Vec::new();
    while let Some(row) = rows.try_next().await? {
        inputs.push(DeviceInputView {
            id: row.get("id"),
            channel_name: row.get("channel_name"),
            z_name: row.get("z_name"),
            o_name: row.get("o_name"),
            crate_number: row.get("crate_number"),
            card_number: row.get("card_number"),
            channel_number: row.get("channel_number"),
        });
    }

    Ok(inputs)
}

/// Fetches all analog devices, each with its device type's threshold states
/// in their defined order.
pub async fn fetch_analog_devices(pool: &DbPool) -> Result<Vec<AnalogDeviceView>> {
    let device_rows = sqlx::query(
        "SELECT ad.id, ad.device_type_id, ac.name AS channel_name,
                ac.number AS channel_number, card.number AS card_number,
                cr.number AS crate_number
         FROM analog_devices ad
         JOIN analog_channels ac ON ac.id = ad.channel_id
         JOIN application_cards card ON card.id = ac.card_id
         JOIN crates cr ON cr.id = card.crate_id
         ORDER BY ad.id",
    )
    .fetch_all(pool.as_ref())
    .await?;

    let mut devices = Vec::with_capacity(device_rows.len());
    for row in &device_rows {
        let device_type_id: i64 = row.get("device_type_id");
        let states = fetch_device_states(pool, device_type_id).await?;

        devices.push(AnalogDeviceView {
            id: row.get("id"),
            channel_name: row.get("channel_name"),
            crate_number: row.get("crate_number"),
            card_number: row.get("card_number"),
            channel_number: row.get("channel_number"),
            states,
        });
    }

    Ok(devices)
}

/// Fetches the threshold states of one device type, in definition order.
async fn fetch_device_states(pool: &DbPool, device_type_id: i64) -> Result<Vec<DeviceStateView>> {
    let rows = sqlx::query(
        "SELECT name, value FROM device_states WHERE device_type_id = ? ORDER BY id",
    )
    .bind(device_type_id)
    .fetch_all(pool.as_ref())
    .await?;

    Ok(rows
        .iter()
        .map(|r| DeviceStateView {
            name: r.get("name"),
            value: r.get("value"),
        })
        .collect())
}

/// Fetches all mitigation devices.
pub async fn fetch_mitigation_devices(pool: &DbPool) -> Result<Vec<MitigationDeviceView>> {
    let rows = sqlx::query("SELECT id, name FROM mitigation_devices ORDER BY id")
        .fetch_all(pool.as_ref())
        .await?;

    Ok(rows
        .iter()
        .map(|r| MitigationDeviceView {
            id: r.get("id"),
            name: r.get("name"),
        })
        .collect())
}

/// Fetches all beam classes.
pub async fn fetch_beam_classes(pool: &DbPool) -> Result<Vec<BeamClassView>> {
    let rows = sqlx::query("SELECT number, description FROM beam_classes ORDER BY id")
        .fetch_all(pool.as_ref())
        .await?;

    Ok(rows
        .iter()
        .map(|r| BeamClassView {
            number: r.get("number"),
            description: r.get("description"),
        })
        .collect())
}

/// Fetches all faults.
pub async fn fetch_faults(pool: &DbPool) -> Result<Vec<FaultView>> {
    let rows = sqlx::query("SELECT id, name, description FROM faults ORDER BY id")
        .fetch_all(pool.as_ref())
        .await?;

    Ok(rows
        .iter()
        .map(|r| FaultView {
            id: r.get("id"),
            name: r.get("name"),
            description: r.get("description"),
        })
        .collect())
}
