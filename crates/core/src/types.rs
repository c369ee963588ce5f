/// All primary keys are PostgreSQL SERIAL (32-bit).
pub type DbId = i32;

/// Timestamps are stored as `TIMESTAMP` without a time zone.
pub type Timestamp = chrono::NaiveDateTime;
