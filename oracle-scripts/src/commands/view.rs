//! Prints the oracle's configured tokens and their prices

use alloy_primitives::U256;
use config::NetworkConfig;
use eyre::{Result, eyre};
use itertools::Itertools;
use oracle_client::OracleClient;
use util::on_chain::wei_to_num;

/// The header of the symbol column
const SYMBOL_HEADER: &str = "symbol";
/// The header of the price column
const PRICE_HEADER: &str = "price";

/// A row of the price table
#[derive(Clone, Debug, PartialEq, Eq)]
struct PriceRow {
    /// The token's symbol
    symbol: String,
    /// The token's price, formatted in whole base price units
    price: String,
}

/// Print the number of tokens the oracle is configured for, followed by the
/// stored price of each declared token
pub(super) async fn run(client: &OracleClient, network_config: &NetworkConfig) -> Result<()> {
    let num_tokens = client.num_tokens().await?;
    println!("\nTotal configs: {num_tokens}");

    let mut rows = Vec::with_capacity(network_config.token_configs.len());
    for underlying in network_config.underlyings() {
        let price = client.price(underlying).await?;
        let symbol = client.token_symbol(underlying).await?;
        rows.push(price_row(symbol, price, network_config.base_price_decimals)?);
    }

    println!("\nUnderlying prices on oracle:");
    println!("{}", format_price_table(&rows));
    Ok(())
}

/// Build a table row, formatting the raw price with the oracle's decimals
fn price_row(symbol: String, raw_price: U256, decimals: u8) -> Result<PriceRow> {
    let price = wei_to_num(raw_price, decimals).map_err(|e| eyre!(e))?;
    Ok(PriceRow { symbol, price })
}

/// Render rows as an aligned two-column table
fn format_price_table(rows: &[PriceRow]) -> String {
    let symbol_width =
        rows.iter().map(|r| r.symbol.len()).chain([SYMBOL_HEADER.len()]).max().unwrap_or_default();
    let price_width =
        rows.iter().map(|r| r.price.len()).chain([PRICE_HEADER.len()]).max().unwrap_or_default();

    let header = format!("{SYMBOL_HEADER:<symbol_width$} | {PRICE_HEADER:>price_width$}");
    let separator = format!("{}-+-{}", "-".repeat(symbol_width), "-".repeat(price_width));
    let body = rows
        .iter()
        .map(|r| format!("{:<symbol_width$} | {:>price_width$}", r.symbol, r.price));

    [header, separator].into_iter().chain(body).join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_price_row_formatting() {
        let raw = U256::from(1_500_000_000_000_000_000u128);
        let row = price_row("WMATIC".to_string(), raw, 18).unwrap();
        assert_eq!(row.symbol, "WMATIC");
        assert_eq!(row.price.parse::<f64>().unwrap(), 1.5);

        let row = price_row("USDC".to_string(), U256::from(1_000_000u64), 6).unwrap();
        assert_eq!(row.price.parse::<f64>().unwrap(), 1.0);
    }

    #[test]
    fn test_format_price_table() {
        let rows = vec![
            PriceRow { symbol: "WMATIC".to_string(), price: "0.51".to_string() },
            PriceRow { symbol: "USDC".to_string(), price: "1.00".to_string() },
        ];

        let table = format_price_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, vec![
            "symbol | price",
            "-------+------",
            "WMATIC |  0.51",
            "USDC   |  1.00",
        ]);
    }

    #[test]
    fn test_format_empty_table() {
        let table = format_price_table(&[]);
        assert_eq!(table, "symbol | price\n-------+------");
    }
}
