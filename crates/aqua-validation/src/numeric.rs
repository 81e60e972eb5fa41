//! Numeric validation functions

/// Participant count: at least one, and at most `max` when the item defines a cap
pub fn validate_participants(count: i64, max: Option<u32>) -> Result<(), String> {
    if count < 1 {
        return Err("At least 1 participant is required".to_string());
    }

    match max {
        Some(max) if count > i64::from(max) => Err(format!("Maximum {} participants", max)),
        _ => Ok(()),
    }
}
