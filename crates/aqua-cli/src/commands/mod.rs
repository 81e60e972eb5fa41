pub mod book;
pub mod quote;
pub mod search;
pub mod signup;

use aqua_forms::ValidationResult;
use colored::Colorize;

/// Prints field errors, one per line
pub fn print_errors(result: &ValidationResult) {
    println!("{}", "✗ Validation failed".red().bold());
    for (field, message) in result.errors() {
        println!("  {}: {}", field.yellow(), message);
    }
}

pub fn format_price(amount: f64, currency: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{} {:.0}", currency, amount)
    } else {
        format!("{} {:.2}", currency, amount)
    }
}
