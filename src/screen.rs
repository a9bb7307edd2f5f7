//! Reactive state for the remittance calculator screen.
//!
//! The presentation layer owns a [`CalculatorScreen`], mutates it through
//! the operations below, and reads [`ScreenState`] (or registers a callback)
//! to render. There is a single logical thread of control; the only
//! suspending operation is the rate fetch, and each selection change starts
//! exactly one of those.
//!
//! An in-flight fetch is identified by a [`FetchTag`]. When the user
//! switches currencies before a response lands, the late response's tag no
//! longer matches and [`CalculatorScreen::apply_fetch`] drops it, so the
//! displayed rate always belongs to the current selection.

use tracing::{debug, warn};

use crate::calculator;
use crate::currency::{CurrencyOption, RECIPIENT_CURRENCIES};
use crate::error::{ConvertError, FetchError};
use crate::rate_provider::{RateProvider, RateQuote};

/// Shown in the inquiry-time row until the first quote lands.
pub const LAST_UPDATE_PENDING: &str = "N/A";
/// Shown in the inquiry-time row after a failed fetch.
pub const LAST_UPDATE_ERROR: &str = "Error";

/// Snapshot of everything the screen renders.
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub source: String,
    pub selected: CurrencyOption,
    pub quote: Option<RateQuote>,
    pub last_update: String,
    pub amount_input: String,
    pub converted_amount: f64,
    pub error_dialog_visible: bool,
}

impl ScreenState {
    /// Current exchange rate, 0.0 while no quote is available.
    pub fn rate(&self) -> f64 {
        self.quote.as_ref().map_or(0.0, |q| q.rate)
    }

    /// Rate row text, e.g. "1130.05 KRW/USD".
    pub fn rate_display(&self) -> String {
        format!("{:.2} {}/{}", self.rate(), self.selected.code, self.source)
    }

    /// Received-amount row text, e.g. "₩113005.00".
    pub fn converted_display(&self) -> String {
        format!("{}{:.2}", self.selected.symbol, self.converted_amount)
    }
}

/// Identifies the fetch started by one selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTag {
    target: String,
    generation: u64,
}

impl FetchTag {
    /// Currency code this fetch was started for.
    pub fn target(&self) -> &str {
        &self.target
    }
}

type Listener = Box<dyn Fn(&ScreenState) + Send>;

pub struct CalculatorScreen {
    state: ScreenState,
    generation: u64,
    listeners: Vec<Listener>,
}

impl CalculatorScreen {
    /// Creates a screen with the first recipient currency selected and no
    /// quote yet. The caller triggers the initial fetch with
    /// [`select_currency`](Self::select_currency) or
    /// [`select_and_refresh`](Self::select_and_refresh).
    pub fn new(source_currency: &str) -> Self {
        CalculatorScreen {
            state: ScreenState {
                source: source_currency.to_string(),
                selected: RECIPIENT_CURRENCIES[0],
                quote: None,
                last_update: LAST_UPDATE_PENDING.to_string(),
                amount_input: String::new(),
                converted_amount: 0.0,
                error_dialog_visible: false,
            },
            generation: 0,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Registers a callback invoked after every state change.
    pub fn subscribe(&mut self, listener: impl Fn(&ScreenState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }

    /// Switches the recipient currency and invalidates the current quote; a
    /// quote for a previously selected currency must never be used.
    ///
    /// Returns the tag for the fetch this selection change triggers. The
    /// caller runs exactly one fetch per returned tag and feeds the outcome
    /// to [`apply_fetch`](Self::apply_fetch).
    pub fn select_currency(&mut self, option: CurrencyOption) -> FetchTag {
        self.generation += 1;
        self.state.selected = option;
        self.state.quote = None;
        self.state.last_update = LAST_UPDATE_PENDING.to_string();
        self.notify();
        FetchTag {
            target: option.code.to_string(),
            generation: self.generation,
        }
    }

    /// Applies a completed fetch.
    ///
    /// A result whose tag no longer matches the current selection is
    /// dropped: it belongs to a currency the user already navigated away
    /// from. Fetch failures collapse into the unavailable state; the cause
    /// stays in the logs and is not surfaced verbatim.
    pub fn apply_fetch(&mut self, tag: &FetchTag, result: Result<RateQuote, FetchError>) {
        if tag.generation != self.generation {
            debug!(target = %tag.target, "Discarding stale rate response");
            return;
        }
        match result {
            Ok(quote) => {
                debug!(rate = quote.rate, target = %quote.target, "Applying fresh quote");
                self.state.last_update = quote.fetched_at_display();
                self.state.quote = Some(quote);
                // Keep the displayed result in step with the new rate when
                // the amount field already holds a valid amount. Empty or
                // invalid input stays inert here; an explicit calculate()
                // is what surfaces those as errors.
                if let Ok(converted) =
                    calculator::convert(&self.state.amount_input, self.state.quote.as_ref())
                {
                    self.state.converted_amount = converted;
                }
            }
            Err(e) => {
                warn!(error = %e, target = %tag.target, "Rate fetch failed");
                self.state.quote = None;
                self.state.last_update = LAST_UPDATE_ERROR.to_string();
            }
        }
        self.notify();
    }

    /// One selection change with its fetch awaited inline.
    pub async fn select_and_refresh(
        &mut self,
        option: CurrencyOption,
        provider: &dyn RateProvider,
    ) {
        let tag = self.select_currency(option);
        let source = self.state.source.clone();
        let result = provider.fetch_rate(&source, tag.target()).await;
        self.apply_fetch(&tag, result);
    }

    pub fn set_amount(&mut self, text: &str) {
        self.state.amount_input = text.to_string();
        self.notify();
    }

    /// Runs the conversion on the current input and quote.
    ///
    /// On failure the error dialog flag is raised and the previously
    /// displayed amount is left untouched.
    pub fn calculate(&mut self) -> Result<f64, ConvertError> {
        match calculator::convert(&self.state.amount_input, self.state.quote.as_ref()) {
            Ok(converted) => {
                self.state.converted_amount = converted;
                self.state.error_dialog_visible = false;
                self.notify();
                Ok(converted)
            }
            Err(e) => {
                self.state.error_dialog_visible = true;
                self.notify();
                Err(e)
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.state.error_dialog_visible = false;
        self.notify();
    }
}
