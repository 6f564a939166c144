use {
    trade_pro::data::{BinanceProvider, FeedError, MarketDataProvider},
    wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    },
};

const TICKER_PATH: &str = "/api/v3/ticker/24hr";

const TICKER_BODY: &str = r#"[
    {"symbol":"BNBBTC","priceChange":"0.00001","priceChangePercent":"0.1","lastPrice":"0.0091"},
    {"symbol":"SOLUSDT","priceChange":"3.10","priceChangePercent":"2.05","lastPrice":"154.20"},
    {"symbol":"DOGEUSDT","priceChange":"0.001","priceChangePercent":"0.7","lastPrice":"0.16"},
    {"symbol":"BTCUSDT","priceChange":"-420.00","priceChangePercent":"-0.64","lastPrice":"65210.50"}
]"#;

async fn server_answering(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TICKER_PATH))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn tickers_are_filtered_to_the_allowlist() {
    let server = server_answering(ResponseTemplate::new(200).set_body_string(TICKER_BODY)).await;
    let provider = BinanceProvider::with_base_url(server.uri()).expect("client");

    let quotes = provider.fetch_tickers().await.expect("ticker fetch");

    let symbols: Vec<_> = quotes.iter().map(|q| q.symbol.as_str()).collect();
    assert_eq!(symbols, ["SOL", "BTC"]);
    assert_eq!(quotes[1].name, "Bitcoin");
    assert_eq!(quotes[1].price, 65210.5);
    assert!(!quotes[1].is_up());
}

#[tokio::test]
async fn server_error_is_reported_as_status() {
    let server = server_answering(ResponseTemplate::new(500)).await;
    let provider = BinanceProvider::with_base_url(server.uri()).expect("client");

    let err = provider.fetch_tickers().await.unwrap_err();
    assert_eq!(err.downcast_ref::<FeedError>(), Some(&FeedError::Status(500)));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server =
        server_answering(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")).await;
    let provider = BinanceProvider::with_base_url(server.uri()).expect("client");

    let err = provider.fetch_tickers().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FeedError>(),
        Some(FeedError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let provider = BinanceProvider::with_base_url("http://127.0.0.1:9").expect("client");
    let err = provider.fetch_tickers().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FeedError>(),
        Some(FeedError::Transport(_))
    ));
}
