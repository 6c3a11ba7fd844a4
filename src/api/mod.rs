mod chart_config;
mod data_controller;
mod engine;
mod geometry_controller;
mod interaction_controller;
mod json_contract;
mod render_coordinator;

pub use chart_config::{DEFAULT_PADDING_PX, LineChartConfig};
pub use engine::LineChartEngine;
pub use json_contract::{LINE_CHART_CONFIG_JSON_SCHEMA_V1, LineChartConfigJsonContractV1};
