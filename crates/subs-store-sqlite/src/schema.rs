//! SQL schema for the SQLite subscription store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! schema revision for future migrations.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    first_name  TEXT NOT NULL,
    UNIQUE (name, first_name)
);

-- Products are reference data; the API never writes here.
CREATE TABLE IF NOT EXISTS products (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    label  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS subscriptions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id  INTEGER NOT NULL REFERENCES contacts(id),
    product_id  INTEGER NOT NULL REFERENCES products(id),
    begin_date  TEXT NOT NULL,   -- YYYY-MM-DD
    end_date    TEXT NOT NULL    -- YYYY-MM-DD
);

CREATE INDEX IF NOT EXISTS subscriptions_contact_idx ON subscriptions(contact_id);

PRAGMA user_version = 1;
";
