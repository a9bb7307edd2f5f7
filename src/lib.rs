pub mod calculator;
pub mod config;
pub mod currency;
pub mod error;
pub mod log;
pub mod providers;
pub mod rate_provider;
pub mod rates;
pub mod screen;
pub mod ui;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::currency::CurrencyOption;
use crate::providers::currencylayer::CurrencylayerProvider;
use crate::rate_provider::RateProvider;
use crate::screen::CalculatorScreen;

pub enum AppCommand {
    Rates,
    Convert { amount: String, to: String },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Remittance calculator starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!(
        base_url = %config.provider.base_url,
        source = %config.source_currency,
        "Loaded config"
    );

    let provider =
        CurrencylayerProvider::new(&config.provider.base_url, &config.provider.access_key);

    match command {
        AppCommand::Rates => {
            let board = rates::fetch_rate_board(&provider, &config.source_currency).await;
            println!("{}", board.display_as_table());
            Ok(())
        }
        AppCommand::Convert { amount, to } => {
            run_convert(&provider, &config.source_currency, &amount, &to).await
        }
    }
}

/// Drives a [`CalculatorScreen`] through one full interaction: select the
/// recipient currency, refresh its rate, enter the amount, calculate.
async fn run_convert(
    provider: &dyn RateProvider,
    source_currency: &str,
    amount: &str,
    to: &str,
) -> Result<()> {
    let option: CurrencyOption = to.parse()?;

    let mut screen = CalculatorScreen::new(source_currency);
    screen.select_and_refresh(option, provider).await;
    screen.set_amount(amount);

    let converted = screen
        .calculate()
        .context("Could not calculate the remittance")?;
    debug!(converted, "Conversion succeeded");

    let state = screen.state();
    print_row("Sending", &state.source);
    print_row("Recipient", &state.selected.to_string());
    print_row("Rate", &state.rate_display());
    print_row("Updated", &state.last_update);
    print_row(
        "Received",
        &ui::style_text(&state.converted_display(), ui::StyleType::Amount),
    );

    Ok(())
}

fn print_row(label: &str, value: &str) {
    println!(
        "{:>10} : {}",
        ui::style_text(label, ui::StyleType::RowLabel),
        value
    );
}
