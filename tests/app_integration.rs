use std::time::Duration;

// Adds automatic logging to test
mod test_utils {
    use std::fs;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub fn live_body(pair: &str, rate: f64) -> String {
        format!(
            r#"{{
                "success": true,
                "terms": "https://currencylayer.com/terms",
                "privacy": "https://currencylayer.com/privacy",
                "timestamp": 1709992245,
                "source": "USD",
                "quotes": {{"{pair}": {rate}}}
            }}"#
        )
    }

    pub async fn mount_live_rate(server: &MockServer, target: &str, rate: f64) {
        Mock::given(method("GET"))
            .and(path("/api/live/"))
            .and(query_param("currencies", target))
            .respond_with(ResponseTemplate::new(200).set_body_string(live_body(
                &format!("USD{target}"),
                rate,
            )))
            .mount(server)
            .await;
    }

    pub fn write_config(base_url: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        let config_content = format!(
            r#"
provider:
  base_url: "{base_url}"
  access_key: "test-key"
source_currency: "USD"
"#
        );
        fs::write(config_file.path(), config_content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_convert_flow_with_mock() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_live_rate(&mock_server, "KRW", 1130.05).await;

    let config_file = test_utils::write_config(&mock_server.uri());

    let result = fxcalc::run_command(
        fxcalc::AppCommand::Convert {
            amount: "100".to_string(),
            to: "KRW".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Convert command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_convert_rejects_out_of_range_amount() {
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_live_rate(&mock_server, "KRW", 1130.05).await;

    let config_file = test_utils::write_config(&mock_server.uri());

    let result = fxcalc::run_command(
        fxcalc::AppCommand::Convert {
            amount: "20000".to_string(),
            to: "KRW".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("amount above the limit must not convert");
    assert!(format!("{err:#}").contains("at most 10000"));
}

#[test_log::test(tokio::test)]
async fn test_convert_with_unavailable_rate_fails() {
    // The endpoint is down; the rate collapses to unavailable and an explicit
    // conversion must surface that instead of printing amount * 0
    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/live/"))
        .respond_with(wiremock::ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config_file = test_utils::write_config(&mock_server.uri());

    let result = fxcalc::run_command(
        fxcalc::AppCommand::Convert {
            amount: "100".to_string(),
            to: "JPY".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("conversion without a rate must fail");
    assert!(format!("{err:#}").contains("no exchange rate available"));
}

#[test_log::test(tokio::test)]
async fn test_rates_flow_with_partial_failures() {
    // KRW and PHP respond, JPY errors; the board must still render
    let mock_server = wiremock::MockServer::start().await;
    test_utils::mount_live_rate(&mock_server, "KRW", 1130.05).await;
    test_utils::mount_live_rate(&mock_server, "PHP", 56.21).await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/live/"))
        .and(wiremock::matchers::query_param("currencies", "JPY"))
        .respond_with(wiremock::ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config_file = test_utils::write_config(&mock_server.uri());

    let result = fxcalc::run_command(
        fxcalc::AppCommand::Rates,
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Rates command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_rapid_currency_switch_keeps_second_selection() {
    use fxcalc::currency::CurrencyOption;
    use fxcalc::providers::currencylayer::CurrencylayerProvider;
    use fxcalc::rate_provider::RateProvider;
    use fxcalc::screen::CalculatorScreen;

    let mock_server = wiremock::MockServer::start().await;

    // The KRW response is slow; JPY answers immediately
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path("/api/live/"))
        .and(wiremock::matchers::query_param("currencies", "KRW"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_string(test_utils::live_body("USDKRW", 1130.05))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;
    test_utils::mount_live_rate(&mock_server, "JPY", 147.32).await;

    let provider = CurrencylayerProvider::new(&mock_server.uri(), "test-key");
    let mut screen = CalculatorScreen::new("USD");

    // First selection: KRW, fetch still in flight...
    let krw_tag = screen.select_currency(CurrencyOption::by_code("KRW").unwrap());
    let slow_provider = provider.clone();
    let krw_fetch = tokio::spawn(async move { slow_provider.fetch_rate("USD", "KRW").await });

    // ...when the user switches to JPY and that fetch completes first
    let jpy_tag = screen.select_currency(CurrencyOption::by_code("JPY").unwrap());
    let jpy_result = provider.fetch_rate("USD", "JPY").await;
    screen.apply_fetch(&jpy_tag, jpy_result);

    // The late KRW response must be discarded, whatever its arrival order
    let krw_result = krw_fetch.await.expect("fetch task panicked");
    screen.apply_fetch(&krw_tag, krw_result);

    let state = screen.state();
    assert_eq!(state.selected.code, "JPY");
    assert_eq!(state.rate(), 147.32);
    assert_eq!(state.quote.as_ref().unwrap().target, "JPY");
}
