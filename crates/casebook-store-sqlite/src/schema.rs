//! SQL schema for the Casebook SQLite store.
//!
//! Compatible with existing `covid19India.db` files, which carry the same two
//! tables.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
///
/// `district.state_id` is declared as a foreign key but not enforced:
/// districts may reference states that do not exist.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = OFF;

CREATE TABLE IF NOT EXISTS state (
    state_id    INTEGER PRIMARY KEY,
    state_name  TEXT    NOT NULL,
    population  INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS district (
    district_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    district_name  TEXT    NOT NULL,
    state_id       INTEGER NOT NULL REFERENCES state(state_id),
    cases          INTEGER NOT NULL,
    cured          INTEGER NOT NULL,
    active         INTEGER NOT NULL,
    deaths         INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS district_state_idx ON district(state_id);
";
