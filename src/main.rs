//! opsmodels - Command Line Interface
//!
//! This is the command-line front-end for the model library.
//! Run with `--help` to see all available models and options.

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tracing::Level;

use opsmodels::{
    config::SamplingConfig,
    data::load_demand_history,
    dispatch::{evaluate, ForecastRequest, ModelRequest, ModelResponse},
    display::{describe_error, display_response},
    error::ModelResult,
    forecast::fit_linear_demand,
    models::{BreakEvenInput, DecayInput, EOQInput, MM1Input, ProductionLPInput},
};

/// Command-line arguments for opsmodels.
#[derive(Parser, Debug)]
#[command(name = "opsmodels")]
#[command(author, version, about = "Evaluate textbook operations-research models", long_about = None)]
struct Args {
    #[command(subcommand)]
    model: Command,

    /// JSON file overriding chart sampling resolutions
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log model evaluations to stderr
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Maximize profit of two products under two capacity constraints
    Production {
        /// Profit per unit of product 1
        #[arg(long, default_value = "20.0")]
        profit_1: f64,

        /// Profit per unit of product 2
        #[arg(long, default_value = "30.0")]
        profit_2: f64,

        /// Resource 1 used per unit of product 1
        #[arg(long, default_value = "1.0")]
        a11: f64,

        /// Resource 1 used per unit of product 2
        #[arg(long, default_value = "2.0")]
        a12: f64,

        /// Resource 2 used per unit of product 1
        #[arg(long, default_value = "2.0")]
        a21: f64,

        /// Resource 2 used per unit of product 2
        #[arg(long, default_value = "1.0")]
        a22: f64,

        /// Available amount of resource 1
        #[arg(long, default_value = "40.0")]
        capacity_1: f64,

        /// Available amount of resource 2
        #[arg(long, default_value = "50.0")]
        capacity_2: f64,
    },

    /// Economic order quantity
    Eoq {
        /// Annual demand (D)
        #[arg(short, long, default_value = "1000.0")]
        demand: f64,

        /// Cost per order (S)
        #[arg(short, long, default_value = "50.0")]
        ordering_cost: f64,

        /// Holding cost per unit per year (H)
        #[arg(long, default_value = "5.0")]
        holding_cost: f64,
    },

    /// Single-server queue performance
    Mm1 {
        /// Arrival rate (λ)
        #[arg(short, long, default_value = "5.0")]
        arrival_rate: f64,

        /// Service rate (μ)
        #[arg(short, long, default_value = "8.0")]
        service_rate: f64,
    },

    /// Linear demand forecast from yearly sales
    Forecast {
        /// Comma-separated years, e.g. "2019,2020,2021"
        #[arg(long, required_unless_present = "history")]
        years: Option<String>,

        /// Comma-separated sales, one per year
        #[arg(long, required_unless_present = "history")]
        sales: Option<String>,

        /// CSV file with `year` and `sales` columns
        #[arg(long, conflicts_with_all = ["years", "sales"])]
        history: Option<PathBuf>,

        /// Year to predict sales for
        #[arg(short, long)]
        predict: i64,
    },

    /// Volume at which revenue covers total cost
    BreakEven {
        /// Fixed cost
        #[arg(short, long)]
        fixed_cost: f64,

        /// Selling price per unit
        #[arg(short, long)]
        price: f64,

        /// Variable cost per unit
        #[arg(long)]
        variable_cost: f64,
    },

    /// Exponential decay of stock over time
    Decay {
        /// Initial quantity (N₀)
        #[arg(short, long, default_value = "1000.0")]
        initial: f64,

        /// Decay rate per year (k)
        #[arg(short, long, default_value = "0.1")]
        rate: f64,

        /// Years to project
        #[arg(long, default_value = "10.0")]
        horizon: f64,
    },
}

fn run(command: Command, sampling: &SamplingConfig) -> Result<ModelResult<ModelResponse>, Box<dyn Error>> {
    let request = match command {
        Command::Production {
            profit_1,
            profit_2,
            a11,
            a12,
            a21,
            a22,
            capacity_1,
            capacity_2,
        } => ModelRequest::Production(ProductionLPInput {
            profits: [profit_1, profit_2],
            constraints: [[a11, a12], [a21, a22]],
            capacities: [capacity_1, capacity_2],
        }),
        Command::Eoq {
            demand,
            ordering_cost,
            holding_cost,
        } => ModelRequest::Eoq(EOQInput {
            annual_demand: demand,
            ordering_cost,
            holding_cost,
        }),
        Command::Mm1 {
            arrival_rate,
            service_rate,
        } => ModelRequest::Mm1(MM1Input {
            arrival_rate,
            service_rate,
        }),
        Command::Forecast {
            history: Some(path),
            predict,
            ..
        } => {
            let series = load_demand_history(&path)?;
            println!("Loaded {} years of demand history.", series.years.len());
            return Ok(fit_linear_demand(&series, predict).map(ModelResponse::Forecast));
        }
        Command::Forecast {
            years,
            sales,
            predict,
            ..
        } => ModelRequest::Forecast(ForecastRequest {
            years: years.unwrap_or_default(),
            sales: sales.unwrap_or_default(),
            query_year: predict,
        }),
        Command::BreakEven {
            fixed_cost,
            price,
            variable_cost,
        } => ModelRequest::BreakEven(BreakEvenInput {
            fixed_cost,
            price_per_unit: price,
            variable_cost_per_unit: variable_cost,
        }),
        Command::Decay {
            initial,
            rate,
            horizon,
        } => ModelRequest::Decay(DecayInput {
            initial_quantity: initial,
            decay_rate: rate,
            horizon,
        }),
    };

    Ok(evaluate(&request, sampling))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let sampling = match &args.config {
        Some(path) => SamplingConfig::load(path)?,
        None => SamplingConfig::default(),
    };

    println!("opsmodels - Operations Research Models");
    println!("================================================================");

    match run(args.model, &sampling)? {
        Ok(response) => display_response(&response),
        Err(err) => {
            eprintln!();
            eprintln!("[ERROR] {}", describe_error(&err));
            std::process::exit(1);
        }
    }

    Ok(())
}
