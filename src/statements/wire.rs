use serde::Deserialize;

/* ---------------- Serde mapping (only what we need) ---------------- */

/// One entry of the `income-statement` array. The payload carries dozens of
/// other fields; they are ignored.
#[derive(Deserialize)]
pub(crate) struct IncomeRowNode {
    pub(crate) date: Option<String>,
    pub(crate) revenue: Option<RawNum>,
    #[serde(rename = "netIncome")]
    pub(crate) net_income: Option<RawNum>,
    #[serde(rename = "grossProfit")]
    pub(crate) gross_profit: Option<RawNum>,
    pub(crate) eps: Option<RawNum>,
    #[serde(rename = "operatingIncome")]
    pub(crate) operating_income: Option<RawNum>,
}

/* --- shared small wrappers + helpers --- */

/// FMP is not consistent about numerics: most fields are JSON numbers, but
/// some payloads carry them as strings. Accept either.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub(crate) enum RawNum {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawNum {
    /// Whole-unit coercion used for the money columns. Fractional values
    /// truncate; non-finite and unparseable values are dropped.
    pub(crate) fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => v.is_finite().then_some(v.trunc() as i64),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .map(|v| v.trunc() as i64)
                })
            }
        }
    }

    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => v.is_finite().then_some(*v),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}
