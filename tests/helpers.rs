// Shared test helpers for building MPS configuration database fixtures.
//
// The exporter only ever reads the configuration database, so these helpers
// own the schema creation and row seeding that external tooling would
// normally perform.

use sqlx::{Row, SqlitePool};
use std::path::Path;

/// Creates a configuration database file with the MPS schema applied and
/// returns a writable pool for seeding. Drop the pool before running the
/// exporter against the file.
pub async fn create_config_db(db_path: &Path) -> SqlitePool {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .read(true)
        .open(db_path)
        .expect("Failed to create database file");

    let pool = SqlitePool::connect(&format!("sqlite:{}", db_path.display()))
        .await
        .expect("Failed to connect to test database");

    create_schema(&pool).await;
    pool
}

/// Applies the slice of the MPS configuration schema the exporter reads.
async fn create_schema(pool: &SqlitePool) {
    for ddl in [
        "CREATE TABLE crates (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL
        )",
        "CREATE TABLE application_cards (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL,
            crate_id INTEGER NOT NULL
        )",
        "CREATE TABLE digital_channels (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL,
            name TEXT NOT NULL,
            z_name TEXT NOT NULL,
            o_name TEXT NOT NULL,
            card_id INTEGER NOT NULL
        )",
        "CREATE TABLE device_inputs (
            id INTEGER PRIMARY KEY,
            channel_id INTEGER NOT NULL
        )",
        "CREATE TABLE analog_channels (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL,
            name TEXT NOT NULL,
            card_id INTEGER NOT NULL
        )",
        "CREATE TABLE device_types (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        "CREATE TABLE device_states (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            value INTEGER NOT NULL,
            device_type_id INTEGER NOT NULL
        )",
        "CREATE TABLE analog_devices (
            id INTEGER PRIMARY KEY,
            channel_id INTEGER NOT NULL,
            device_type_id INTEGER NOT NULL
        )",
        "CREATE TABLE mitigation_devices (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        )",
        "CREATE TABLE beam_classes (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL,
            name TEXT,
            description TEXT NOT NULL
        )",
        "CREATE TABLE faults (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL
        )",
    ] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .expect("Failed to create schema");
    }
}

/// Inserts a crate and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_crate(pool: &SqlitePool, number: i64) -> i64 {
    sqlx::query("INSERT INTO crates (number) VALUES (?) RETURNING id")
        .bind(number)
        .fetch_one(pool)
        .await
        .expect("Failed to insert crate")
        .get::<i64, _>(0)
}

/// Inserts an application card and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_card(pool: &SqlitePool, crate_id: i64, number: i64) -> i64 {
    sqlx::query("INSERT INTO application_cards (number, crate_id) VALUES (?, ?) RETURNING id")
        .bind(number)
        .bind(crate_id)
        .fetch_one(pool)
        .await
        .expect("Failed to insert card")
        .get::<i64, _>(0)
}

/// Inserts a digital channel and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_digital_channel(
    pool: &SqlitePool,
    card_id: i64,
    number: i64,
    name: &str,
    z_name: &str,
    o_name: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO digital_channels (number, name, z_name, o_name, card_id)
         VALUES (?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(number)
    .bind(name)
    .bind(z_name)
    .bind(o_name)
    .bind(card_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert digital channel")
    .get::<i64, _>(0)
}

/// Inserts a device input with an explicit id (the id is the asyn address,
/// so tests pin it).
#[allow(dead_code)] // Used by other test files
pub async fn insert_device_input(pool: &SqlitePool, id: i64, channel_id: i64) -> i64 {
    sqlx::query("INSERT INTO device_inputs (id, channel_id) VALUES (?, ?)")
        .bind(id)
        .bind(channel_id)
        .execute(pool)
        .await
        .expect("Failed to insert device input");
    id
}

/// Inserts an analog channel and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_analog_channel(
    pool: &SqlitePool,
    card_id: i64,
    number: i64,
    name: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO analog_channels (number, name, card_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(number)
    .bind(name)
    .bind(card_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert analog channel")
    .get::<i64, _>(0)
}

/// Inserts a device type and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_device_type(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO device_types (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to insert device type")
        .get::<i64, _>(0)
}

/// Inserts a device state and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_device_state(
    pool: &SqlitePool,
    device_type_id: i64,
    name: &str,
    value: i64,
) -> i64 {
    sqlx::query(
        "INSERT INTO device_states (name, value, device_type_id) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(value)
    .bind(device_type_id)
    .fetch_one(pool)
    .await
    .expect("Failed to insert device state")
    .get::<i64, _>(0)
}

/// Inserts an analog device with an explicit id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_analog_device(
    pool: &SqlitePool,
    id: i64,
    channel_id: i64,
    device_type_id: i64,
) -> i64 {
    sqlx::query("INSERT INTO analog_devices (id, channel_id, device_type_id) VALUES (?, ?, ?)")
        .bind(id)
        .bind(channel_id)
        .bind(device_type_id)
        .execute(pool)
        .await
        .expect("Failed to insert analog device");
    id
}

/// Inserts a mitigation device with an explicit id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_mitigation_device(pool: &SqlitePool, id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO mitigation_devices (id, name) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert mitigation device");
    id
}

/// Inserts a beam class and returns its id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_beam_class(
    pool: &SqlitePool,
    number: i64,
    name: &str,
    description: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO beam_classes (number, name, description) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(number)
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
    .expect("Failed to insert beam class")
    .get::<i64, _>(0)
}

/// Inserts a fault with an explicit id.
#[allow(dead_code)] // Used by other test files
pub async fn insert_fault(pool: &SqlitePool, id: i64, name: &str, description: &str) -> i64 {
    sqlx::query("INSERT INTO faults (id, name, description) VALUES (?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await
        .expect("Failed to insert fault");
    id
}
