use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::LineChartConfig;

pub const LINE_CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: LineChartConfig,
}

impl LineChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LineChartConfigJsonContractV1 {
            schema_version: LINE_CHART_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let config = match serde_json::from_str::<LineChartConfig>(input) {
            Ok(config) => config,
            Err(_) => {
                let payload: LineChartConfigJsonContractV1 = serde_json::from_str(input)
                    .map_err(|e| {
                        ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
                    })?;
                if payload.schema_version != LINE_CHART_CONFIG_JSON_SCHEMA_V1 {
                    return Err(ChartError::InvalidData(format!(
                        "unsupported config schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.config
            }
        };
        config.validate()?;
        Ok(config)
    }
}
