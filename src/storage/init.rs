//! Data file initialization
//!
//! Creates the schema on first use. Safe to run on every startup.

use rusqlite::Connection;

/// Create the transactions table and its index if they don't exist yet
pub fn initialize_schema(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS transactions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT    NOT NULL,
            amount      INTEGER NOT NULL CHECK (amount > 0),
            kind        TEXT    NOT NULL CHECK (kind IN ('income', 'expense')),
            category    TEXT    NOT NULL,
            description TEXT    NOT NULL DEFAULT '',
            created_at  TEXT    NOT NULL
        );
        CREATE INDEX IF NOT EXISTS transactions_by_date ON transactions (date, id);",
    )
}
