use soroban_sdk::Env;

use crate::storage_types::{Error, SECONDS_PER_DAY};

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Get current timestamp
pub fn get_current_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// True once `timestamp` is now or in the past.
pub fn has_arrived(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() >= timestamp
}

/// Seconds remaining until `timestamp`, zero once it has arrived.
pub fn seconds_until(env: &Env, timestamp: u64) -> u64 {
    timestamp.saturating_sub(env.ledger().timestamp())
}

/// Absolute deadline `duration_days` after `now`.
pub fn deadline_after(now: u64, duration_days: u32) -> Result<u64, Error> {
    now.checked_add(days_to_seconds(duration_days))
        .ok_or(Error::InvalidParameters)
}

/// Validate duration is at least one day
pub fn validate_duration(days: u32) -> Result<(), Error> {
    if days == 0 {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

/// Validate goal is positive
pub fn validate_goal(goal_amount: i128) -> Result<(), Error> {
    if goal_amount <= 0 {
        return Err(Error::InvalidParameters);
    }
    Ok(())
}

/// Missing minimum resolves to zero.
///
/// A zero minimum still does not admit zero-amount contributions; those are
/// refused with `BelowMinimum` when funding (see `campaign::plan_contribution`).
pub fn resolve_minimum(minimum_amount: Option<i128>) -> Result<i128, Error> {
    match minimum_amount {
        Some(minimum) if minimum < 0 => Err(Error::InvalidParameters),
        Some(minimum) => Ok(minimum),
        None => Ok(0),
    }
}
