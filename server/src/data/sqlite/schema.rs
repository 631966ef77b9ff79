//! SQLite schema definitions

/// Current schema version
pub const SCHEMA_VERSION: i32 = 1;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- Electric cars
-- =============================================================================
CREATE TABLE IF NOT EXISTS electric_cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand TEXT,
    model TEXT,
    accel_sec REAL,
    top_speed_kmh INTEGER,
    range_km INTEGER,
    efficiency_whkm INTEGER,
    fast_charge_kmh INTEGER,
    rapid_charge TEXT,
    power_train TEXT,
    plug_type TEXT,
    body_style TEXT,
    segment TEXT,
    seats INTEGER,
    price_euro INTEGER,
    date TEXT,
    created_at INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
);

CREATE INDEX IF NOT EXISTS idx_electric_cars_brand ON electric_cars(brand);
CREATE INDEX IF NOT EXISTS idx_electric_cars_price ON electric_cars(price_euro);
"#;

/// Columns selected for `CarRow`, in struct order
pub const CAR_COLUMNS: &str = "id, brand, model, accel_sec, top_speed_kmh, range_km, \
    efficiency_whkm, fast_charge_kmh, rapid_charge, power_train, plug_type, body_style, \
    segment, seats, price_euro, date, created_at";
