use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::figure::model::Figure;

pub const FIGURE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for figure JSON handed across process boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureJsonContractV1 {
    pub schema_version: u32,
    pub figure: Figure,
}

impl Figure {
    /// Compact JSON of the bare figure. Deterministic for identical figures.
    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string(self)
            .map_err(|e| BoardError::InvalidData(format!("failed to serialize figure json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> BoardResult<String> {
        let payload = FigureJsonContractV1 {
            schema_version: FIGURE_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            BoardError::InvalidData(format!("failed to serialize figure contract v1: {e}"))
        })
    }

    /// Parses either a bare figure or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> BoardResult<Self> {
        if let Ok(figure) = serde_json::from_str::<Figure>(input) {
            return Ok(figure);
        }
        let payload: FigureJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| BoardError::InvalidData(format!("failed to parse figure json payload: {e}")))?;
        if payload.schema_version != FIGURE_JSON_SCHEMA_V1 {
            return Err(BoardError::InvalidData(format!(
                "unsupported figure schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.figure)
    }
}
