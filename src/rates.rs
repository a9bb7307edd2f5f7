//! Live-rate overview across every supported recipient currency.

use comfy_table::Cell;
use futures::future::join_all;
use tracing::warn;

use crate::currency::{CurrencyOption, RECIPIENT_CURRENCIES};
use crate::rate_provider::{RateProvider, RateQuote};
use crate::ui;

#[derive(Debug)]
pub struct RateBoardRow {
    pub currency: CurrencyOption,
    pub quote: Option<RateQuote>,
}

#[derive(Debug)]
pub struct RateBoard {
    pub source: String,
    pub rows: Vec<RateBoardRow>,
}

impl RateBoard {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();

        table.set_header(vec![
            ui::header_cell("Recipient"),
            ui::header_cell("Code"),
            ui::header_cell(&format!("Rate (per {})", self.source)),
            ui::header_cell("Updated"),
        ]);

        for row in &self.rows {
            table.add_row(vec![
                Cell::new(row.currency.country),
                Cell::new(row.currency.code),
                ui::rate_cell(row.quote.as_ref().map(|q| q.rate)),
                ui::updated_cell(
                    row.quote
                        .as_ref()
                        .map(|q| q.fetched_at_display())
                        .as_deref(),
                ),
            ]);
        }

        format!(
            "{}\n\n{}",
            ui::style_text(
                &format!("Live rates from {}", self.source),
                ui::StyleType::Title
            ),
            table
        )
    }
}

/// Fetches a quote for every recipient currency concurrently. A failed fetch
/// becomes an empty row rather than aborting the board.
pub async fn fetch_rate_board(provider: &dyn RateProvider, source: &str) -> RateBoard {
    let pb = ui::new_fetch_progress(RECIPIENT_CURRENCIES.len() as u64);
    pb.set_message("Fetching live rates...");

    let fetches = RECIPIENT_CURRENCIES.iter().map(|currency| {
        let pb = pb.clone();
        async move {
            let result = provider.fetch_rate(source, currency.code).await;
            pb.inc(1);
            let quote = match result {
                Ok(quote) => Some(quote),
                Err(e) => {
                    warn!(error = %e, code = currency.code, "Rate fetch failed");
                    None
                }
            };
            RateBoardRow {
                currency: *currency,
                quote,
            }
        }
    });

    let rows = join_all(fetches).await;
    pb.finish_and_clear();

    RateBoard {
        source: source.to_string(),
        rows,
    }
}
