/// All database primary keys are 64-bit integers (BIGINT / BIGSERIAL).
pub type DbId = i64;
