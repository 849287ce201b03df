use chrono::NaiveDate;

use crate::{
    core::{FmpClient, FmpError, net},
    statements::{
        model::{IncomePeriod, Period},
        wire,
    },
};

pub(super) async fn income_statement(
    client: &FmpClient,
    symbol: &str,
    period: Period,
) -> Result<Vec<IncomePeriod>, FmpError> {
    let mut url = client.base_api().join(&format!("income-statement/{symbol}"))?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(p) = period.as_query() {
            pairs.append_pair("period", p);
        }
        pairs.append_pair("apikey", client.api_key());
    }

    let resp = client.http().get(url).send().await?;
    let body = net::get_text(resp).await?;

    let nodes: Vec<wire::IncomeRowNode> = serde_json::from_str(&body).map_err(FmpError::Json)?;

    let rows = nodes
        .into_iter()
        .filter_map(|node| {
            let row = from_node(node);
            #[cfg(feature = "tracing")]
            if row.is_none() {
                tracing::warn!(symbol, "skipping income statement row with unusable fields");
            }
            row
        })
        .collect();

    Ok(rows)
}

/// Converts one wire row, coercing every numeric field. A row missing any
/// required field, or carrying one that cannot be coerced, yields `None`.
fn from_node(node: wire::IncomeRowNode) -> Option<IncomePeriod> {
    let date = NaiveDate::parse_from_str(node.date.as_deref()?, "%Y-%m-%d").ok()?;

    Some(IncomePeriod {
        date,
        revenue: node.revenue?.as_i64()?,
        net_income: node.net_income?.as_i64()?,
        gross_profit: node.gross_profit?.as_i64()?,
        eps: node.eps?.as_f64()?,
        operating_income: node.operating_income?.as_i64()?,
    })
}
