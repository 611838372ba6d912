use std::collections::BTreeMap;

use fm_core::Exchange;
use serde::{Deserialize, Serialize};

pub const TESTCASE_SCHEMA_V1: &str = "frameml-case.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub schema_version: String,
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
    #[serde(default)]
    pub responses: Vec<String>,
    #[serde(default)]
    pub expected_exchanges: Vec<Exchange>,
    /// Error code the run must fail with, e.g. `SCRIPT_INVALID`.
    #[serde(default)]
    pub expected_error: Option<String>,
}
