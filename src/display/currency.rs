//! Currency catalog display

use tabled::{settings::Style, Table, Tabled};

use crate::models::Currency;

#[derive(Tabled)]
struct CurrencyRow {
    #[tabled(rename = " ")]
    marker: &'static str,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format the catalog, marking the selected symbol with `*`
pub fn format_catalog(currencies: &[Currency], selected_symbol: &str) -> String {
    let rows = currencies.iter().map(|c| CurrencyRow {
        marker: if c.symbol == selected_symbol { "*" } else { "" },
        code: c.code.clone(),
        symbol: c.symbol.clone(),
        name: c.name.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
