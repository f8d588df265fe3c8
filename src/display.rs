//! Display and formatting utilities for opsmodels.
//!
//! Rounding, currency and percentage formatting belong to presentation, not
//! to the models, so they live here alongside the printers used by the
//! command-line front-end.

use crate::dispatch::ModelResponse;
use crate::error::{InfeasibleCause, ModelError};
use crate::models::{
    BreakEvenResult, DecayResult, EOQResult, MM1Result, ProductionLPResult, RegressionResult,
};

const RULE: &str = "----------------------------------------------------------------";
const BAR_WIDTH: f64 = 40.0;

/// Rounds to two decimal places.
///
/// # Example
///
/// ```
/// use opsmodels::display::round2;
///
/// assert_eq!(round2(141.421356), 141.42);
/// assert_eq!(round2(0.625), 0.63);
/// ```
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount of money with a thousands separator and two decimals.
///
/// # Example
///
/// ```
/// use opsmodels::display::format_currency;
///
/// assert_eq!(format_currency(1234567.891), "$1,234,567.89");
/// assert_eq!(format_currency(-42.0), "-$42.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}

/// Formats a ratio such as a utilization as a percentage.
///
/// # Example
///
/// ```
/// use opsmodels::display::format_percent;
///
/// assert_eq!(format_percent(0.625), "62.50%");
/// ```
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Turns a model failure into a message for the person filling in the form.
pub fn describe_error(err: &ModelError) -> String {
    match err {
        ModelError::InvalidInput {
            parameter: "contribution_margin",
            ..
        } => "The selling price must be higher than the variable cost per unit.".to_string(),
        ModelError::InvalidInput { parameter, value } => format!(
            "The value {} is not allowed for {}.",
            value,
            parameter.replace('_', " ")
        ),
        ModelError::UnstableSystem { .. } => {
            "The arrival rate (λ) must be smaller than the service rate (μ) for the queue to be stable.".to_string()
        }
        ModelError::Infeasible { cause } => match cause {
            InfeasibleCause::EmptyRegion => "No production plan satisfies every constraint.".to_string(),
            InfeasibleCause::Unbounded => {
                "Profit can grow without limit; check that every product uses some capacity.".to_string()
            }
            InfeasibleCause::NoCapacity => "Every capacity must be greater than zero.".to_string(),
        },
        ModelError::LengthMismatch { years, sales } => format!(
            "Enter the same number of years and sales figures ({} years, {} sales).",
            years, sales
        ),
        ModelError::MalformedInput { token } => {
            format!("'{}' is not a whole number. Separate values with commas.", token)
        }
        ModelError::InsufficientData { .. } => {
            "At least two different years are needed to fit a trend.".to_string()
        }
    }
}

fn header(title: &str) {
    println!();
    println!("+================================================================+");
    println!("|  {:<62}|", title);
    println!("+================================================================+");
    println!();
}

/// Prints the optimal production plan.
pub fn display_production(result: &ProductionLPResult) {
    header("PRODUCTION OPTIMIZATION (LINEAR PROGRAMMING)");
    println!("[OPTIMAL PLAN]");
    println!("{}", RULE);
    println!("  Product 1:        {:.2} units", result.quantities[0]);
    println!("  Product 2:        {:.2} units", result.quantities[1]);
    println!("  Maximum Profit:   {}", format_currency(result.max_profit));
    println!();
}

/// Prints the EOQ and a coarse view of the cost curve.
pub fn display_eoq(result: &EOQResult) {
    header("INVENTORY MODEL (EOQ)");
    println!("[SUMMARY]");
    println!("{}", RULE);
    println!("  EOQ:              {:.2} units", result.eoq);
    println!("  Orders per Year:  {:.2}", result.orders_per_year);
    println!("  Ordering Cost:    {}", format_currency(result.annual_ordering_cost));
    println!("  Holding Cost:     {}", format_currency(result.annual_holding_cost));
    println!("  Total Cost:       {}", format_currency(result.total_cost));

    println!();
    println!("[TOTAL COST CURVE]");
    println!("{}", RULE);
    println!("{:>14} {:>20}", "Order Qty", "Total Cost");
    let stride = (result.cost_curve.len() / 10).max(1);
    for point in result.cost_curve.iter().step_by(stride) {
        println!("{:>14.2} {:>20}", point.x, format_currency(point.y));
    }
    println!();
}

/// Prints queue metrics and a text bar chart of the state distribution.
pub fn display_mm1(result: &MM1Result) {
    header("QUEUEING MODEL (M/M/1)");
    println!("[PERFORMANCE]");
    println!("{}", RULE);
    println!("  Utilization (ρ):          {}", format_percent(result.utilization));
    println!("  In System (L):            {:.2}", result.expected_in_system);
    println!("  In Queue (Lq):            {:.2}", result.expected_in_queue);
    println!("  Time in System (W):       {:.2}", result.expected_time_in_system);
    println!("  Time in Queue (Wq):       {:.2}", result.expected_time_in_queue);

    println!();
    println!(
        "[CUSTOMERS IN SYSTEM] (first {} states, {} of probability)",
        result.state_probabilities.len(),
        format_percent(result.captured_mass())
    );
    println!("{}", RULE);
    let peak = result
        .state_probabilities
        .iter()
        .copied()
        .fold(0.0, f64::max);
    for (n, p) in result.state_probabilities.iter().enumerate() {
        let width = if peak > 0.0 {
            (p / peak * BAR_WIDTH).round() as usize
        } else {
            0
        };
        println!("  {:>3} {:>8.4} {}", n, p, "#".repeat(width));
    }
    println!();
}

/// Prints the fitted trend and the forecast.
pub fn display_forecast(result: &RegressionResult) {
    header("DEMAND FORECAST (LINEAR REGRESSION)");
    println!("[TREND]");
    println!("{}", RULE);
    println!(
        "  sales = {:.2} + {:.2} x year",
        result.intercept, result.slope
    );
    println!();
    println!("{:>8} {:>16}", "Year", "Fitted Sales");
    for point in &result.trend {
        println!("{:>8} {:>16.2}", point.x, point.y);
    }
    println!();
    println!(
        "  Forecast for {}:  {:.2} units",
        result.query_year, result.prediction
    );
    println!();
}

/// Prints the break-even volume and revenue.
pub fn display_break_even(result: &BreakEvenResult) {
    header("BREAK-EVEN ANALYSIS");
    println!("[SUMMARY]");
    println!("{}", RULE);
    println!("  Contribution Margin:  {}", format_currency(result.contribution_margin));
    println!("  Break-even Volume:    {:.2} units", result.break_even_units);
    println!("  Break-even Revenue:   {}", format_currency(result.break_even_revenue));
    println!();
}

/// Prints the quantity left at the horizon.
pub fn display_decay(result: &DecayResult) {
    header("EXPONENTIAL DECAY");
    println!("[SUMMARY]");
    println!("{}", RULE);
    if let Some(last) = result.curve.last() {
        println!("  Remaining after {:.2}:  {:.2}", last.x, result.remaining);
    }
    match result.half_life {
        Some(h) => println!("  Half-life:            {:.2}", h),
        None => println!("  Half-life:            N/A (no decay)"),
    }
    println!();
}

/// Prints any model response with the matching printer.
pub fn display_response(response: &ModelResponse) {
    match response {
        ModelResponse::Production(r) => display_production(r),
        ModelResponse::Eoq(r) => display_eoq(r),
        ModelResponse::Mm1(r) => display_mm1(r),
        ModelResponse::Forecast(r) => display_forecast(r),
        ModelResponse::BreakEven(r) => display_break_even(r),
        ModelResponse::Decay(r) => display_decay(r),
    }
}
