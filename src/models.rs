//! Data models for opsmodels.
//!
//! Plain value records passed into and returned from the calculation
//! functions. None of them outlive the call that produced them; every
//! evaluation recomputes from scratch.

use serde::{Deserialize, Serialize};

use crate::curve::CurvePoint;

// ============================================================================
// Production planning
// ============================================================================

/// A two-product, two-constraint production plan to maximize profit.
///
/// Decision variables are continuous and non-negative. Each row of
/// `constraints` holds the resource usage per unit of product one and
/// product two; `capacities` holds the matching resource limits.
///
/// # Example
///
/// ```
/// use opsmodels::models::ProductionLPInput;
///
/// let plan = ProductionLPInput {
///     profits: [20.0, 30.0],
///     constraints: [[1.0, 2.0], [2.0, 1.0]],
///     capacities: [40.0, 50.0],
/// };
/// assert_eq!(plan.capacities[1], 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionLPInput {
    /// Profit per unit of each product
    pub profits: [f64; 2],
    /// Resource usage per unit, one row per constraint
    pub constraints: [[f64; 2]; 2],
    /// Available amount of each resource
    pub capacities: [f64; 2],
}

/// Optimal production quantities and the profit they earn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductionLPResult {
    /// Units of each product to produce
    pub quantities: [f64; 2],
    /// Profit at the optimum
    pub max_profit: f64,
}

// ============================================================================
// Inventory (EOQ)
// ============================================================================

/// Parameters of the classic economic order quantity model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EOQInput {
    /// Annual demand (D)
    pub annual_demand: f64,
    /// Cost of placing one order (S)
    pub ordering_cost: f64,
    /// Cost of holding one unit for a year (H)
    pub holding_cost: f64,
}

/// Economic order quantity and its cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EOQResult {
    /// Order size minimizing total cost
    pub eoq: f64,
    /// Ordering cost per year at the EOQ
    pub annual_ordering_cost: f64,
    /// Holding cost per year at the EOQ
    pub annual_holding_cost: f64,
    /// Total cost per year at the EOQ
    pub total_cost: f64,
    /// Number of orders placed per year at the EOQ
    pub orders_per_year: f64,
    /// Total cost sampled over order quantities up to twice the EOQ
    pub cost_curve: Vec<CurvePoint>,
}

// ============================================================================
// Queueing (M/M/1)
// ============================================================================

/// Arrival and service rates of a single-server queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MM1Input {
    /// Mean arrivals per unit time (λ)
    pub arrival_rate: f64,
    /// Mean services per unit time (μ)
    pub service_rate: f64,
}

/// Steady-state performance of an M/M/1 queue.
///
/// `state_probabilities[n]` is the probability of `n` customers in the
/// system. The true distribution has infinite support; the sequence is cut
/// off after a fixed number of states for display, so it sums to
/// `1 - ρ^N` rather than one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MM1Result {
    /// Server utilization ρ = λ/μ
    pub utilization: f64,
    /// Probability the server is idle, P(0) = 1 − ρ
    pub idle_probability: f64,
    /// Expected number in the system (L)
    pub expected_in_system: f64,
    /// Expected number waiting in the queue (Lq)
    pub expected_in_queue: f64,
    /// Expected time in the system (W)
    pub expected_time_in_system: f64,
    /// Expected time waiting in the queue (Wq)
    pub expected_time_in_queue: f64,
    /// P(n) for n = 0..N-1
    pub state_probabilities: Vec<f64>,
}

impl MM1Result {
    /// Total probability covered by the truncated distribution.
    ///
    /// # Example
    ///
    /// ```
    /// use opsmodels::models::MM1Input;
    /// use opsmodels::queueing::compute_mm1;
    ///
    /// let result = compute_mm1(&MM1Input { arrival_rate: 1.0, service_rate: 2.0 }, 3).unwrap();
    /// assert!((result.captured_mass() - 0.875).abs() < 1e-12);
    /// ```
    pub fn captured_mass(&self) -> f64 {
        self.state_probabilities.iter().sum()
    }
}

// ============================================================================
// Demand forecasting
// ============================================================================

/// Historical sales, one entry per year.
///
/// The two sequences are parallel: `sales[i]` was observed in `years[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSeries {
    /// Calendar years of the observations
    pub years: Vec<i64>,
    /// Units sold in the matching year
    pub sales: Vec<i64>,
}

/// Least-squares trend line and a prediction from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    /// Change in sales per year
    pub slope: f64,
    /// Sales at year zero
    pub intercept: f64,
    /// Year the prediction was made for
    pub query_year: i64,
    /// Predicted sales for `query_year`
    pub prediction: f64,
    /// Fitted line at each historical year followed by the query year
    pub trend: Vec<CurvePoint>,
}

impl RegressionResult {
    /// Evaluates the fitted line at `year`.
    pub fn predict(&self, year: i64) -> f64 {
        self.intercept + self.slope * year as f64
    }
}

// ============================================================================
// Break-even
// ============================================================================

/// Cost structure of a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenInput {
    /// Costs incurred regardless of volume
    pub fixed_cost: f64,
    /// Selling price of one unit
    pub price_per_unit: f64,
    /// Cost to make one unit
    pub variable_cost_per_unit: f64,
}

/// Volume at which revenue covers total cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakEvenResult {
    /// Price minus variable cost
    pub contribution_margin: f64,
    /// Units to sell before profit turns positive (F / margin)
    pub break_even_units: f64,
    /// Revenue at the break-even volume
    pub break_even_revenue: f64,
    /// Revenue sampled over the charted volume range
    pub revenue_curve: Vec<CurvePoint>,
    /// Fixed plus variable cost over the same range
    pub cost_curve: Vec<CurvePoint>,
}

// ============================================================================
// Exponential decay
// ============================================================================

/// Stock that deteriorates at a constant proportional rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecayInput {
    /// Quantity at time zero (N₀)
    pub initial_quantity: f64,
    /// Proportional loss per unit time (k)
    pub decay_rate: f64,
    /// End of the observed period (T)
    pub horizon: f64,
}

/// Decayed stock at the horizon and over time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecayResult {
    /// Quantity left at the horizon
    pub remaining: f64,
    /// Time for the stock to halve; `None` when nothing decays
    pub half_life: Option<f64>,
    /// N(t) sampled over `[0, horizon]`
    pub curve: Vec<CurvePoint>,
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for demand history files.
#[derive(Debug, Deserialize)]
pub struct DemandRow {
    /// Calendar year of the observation
    pub year: i64,
    /// Units sold in that year
    pub sales: i64,
}
