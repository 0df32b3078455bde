use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How the extracted figures should be read: a lone figure is a floor,
/// two or more describe a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayType {
    Minimum,
    Range,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayPeriod {
    Hourly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// Disambiguated salary output of the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryFigures {
    pub pay_type: PayType,
    pub range: SalaryRange,
    pub pay_period: PayPeriod,
}

/// The merged classification result: one object keyed by group name, plus
/// the optional pay fields. The `languages` key is always present, even
/// when nothing else is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedResult {
    #[serde(flatten)]
    pub groups: BTreeMap<String, Vec<String>>,
    #[serde(rename = "payType", skip_serializing_if = "Option::is_none")]
    pub pay_type: Option<PayType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<SalaryRange>,
    #[serde(rename = "payPeriod", skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<PayPeriod>,
}
