//! Support coordination goal strategies.

mod request;
mod strategies;

pub use request::{GoalStrategiesInput, GoalStrategiesRequest};
pub use strategies::{GoalPlan, GoalStrategies};
