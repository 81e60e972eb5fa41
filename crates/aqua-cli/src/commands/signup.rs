use anyhow::Result;
use aqua_forms::auth::register_schema;
use aqua_forms::{FormValues, RegisterData};
use colored::Colorize;

use super::print_errors;

pub fn execute(values: &FormValues) -> Result<bool> {
    let result = register_schema().validate(values);
    if !result.is_valid() {
        print_errors(&result);
        return Ok(false);
    }

    let data = RegisterData::from_values(values);
    println!(
        "{} {} {} <{}> as {}",
        "✓ Registration valid:".green().bold(),
        data.first_name,
        data.last_name,
        data.email,
        data.role
    );
    Ok(true)
}
