/// Database access layer
///
/// This module groups everything that touches the SQLite file directly:
///
/// - `pool`: Connection pool creation and health checking
/// - `schema`: Idempotent table creation
/// - `seed`: Demo-data seeding for empty tables

pub mod pool;
pub mod schema;
pub mod seed;
