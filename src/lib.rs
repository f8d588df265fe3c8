//! # opsmodels
//!
//! A command-line tool and library for textbook operations-research models,
//! with JSON bindings for a web form front-end.
//!
//! Each model is a pure function of its inputs:
//!
//! - Production planning as a two-product linear program
//! - Economic order quantity (EOQ) with its total-cost curve
//! - M/M/1 queue performance and state distribution
//! - Linear-regression demand forecasting
//! - Break-even analysis
//! - Exponential decay of stock
//!
//! ## Modules
//!
//! - [`models`] - Input and result records for every model
//! - [`production`], [`inventory`], [`queueing`], [`forecast`], [`breakeven`], [`decay`] - The models
//! - [`dispatch`] - Tagged request type selecting one model
//! - [`config`] - Chart sampling resolutions
//! - [`curve`] - Sampled chart curves
//! - [`data`] - CSV loading of demand history
//! - [`display`] - Output formatting and display utilities
//! - [`error`] - Failure taxonomy
//! - [`wasm`] - WebAssembly entry points
//!
//! ## Example Usage
//!
//! ```
//! use opsmodels::{
//!     config::SamplingConfig,
//!     dispatch::{evaluate, ModelRequest, ModelResponse},
//!     error::ErrorKind,
//!     models::MM1Input,
//! };
//!
//! let sampling = SamplingConfig::default();
//!
//! let request = ModelRequest::Mm1(MM1Input { arrival_rate: 5.0, service_rate: 8.0 });
//! if let Ok(ModelResponse::Mm1(queue)) = evaluate(&request, &sampling) {
//!     assert_eq!(queue.state_probabilities.len(), 20);
//! }
//!
//! // Arrivals faster than service have no steady state.
//! let overloaded = ModelRequest::Mm1(MM1Input { arrival_rate: 9.0, service_rate: 8.0 });
//! let err = evaluate(&overloaded, &sampling).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::UnstableSystem);
//! ```

pub mod breakeven;
pub mod config;
pub mod curve;
pub mod data;
pub mod decay;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod forecast;
pub mod inventory;
pub mod models;
pub mod production;
pub mod queueing;
pub mod wasm;
