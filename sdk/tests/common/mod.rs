#![allow(dead_code)]

use {
    chrono::{DateTime, TimeZone, Utc},
    fasapay_sdk::{Config, EnvelopeAttributes, FasapayClient, FormEncoding, SANDBOX_API_URL},
    mockito::{Matcher, Mock, Server, ServerGuard},
    url::Url,
};

pub const API_KEY: &str = "11123548cd3a5e5613325132112becf";
pub const API_SECRET_WORD: &str = "kata rahasia";
pub const AUTH_TOKEN: &str = "e910361e42dafdfd100b19701c2ef403858cab640fd699afc67b78c7603ddb1b";
pub const REQUEST_ID: &str = "1234567";
pub const API_PATH: &str = "/api";

pub fn stub_config() -> Config {
    Config {
        api_uri: SANDBOX_API_URL.to_string(),
        api_key: API_KEY.to_string(),
        api_secret_word: API_SECRET_WORD.to_string(),
    }
}

pub fn stub_date_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2011, 7, 20, 15, 30, 0).unwrap()
}

pub fn stub_attributes() -> Option<EnvelopeAttributes> {
    Some(EnvelopeAttributes::new(REQUEST_ID, stub_date_time()))
}

/// The signed request envelope around `payload`.
pub fn stub_request(payload: &str) -> String {
    format!(
        r#"<fasa_request id="{REQUEST_ID}"><auth><api_key>{API_KEY}</api_key><token>{AUTH_TOKEN}</token></auth>{payload}</fasa_request>"#
    )
}

/// Start a mock server and a client posting to it.
pub async fn setup_mock_server(encoding: FormEncoding) -> (ServerGuard, FasapayClient) {
    let server = Server::new_async().await;
    let endpoint = Url::parse(&format!("{}{API_PATH}", server.url())).unwrap();

    let client = FasapayClient::builder(stub_config())
        .with_client(reqwest::Client::new())
        .with_endpoint(endpoint)
        .with_form_encoding(encoding)
        .build()
        .unwrap();

    (server, client)
}

/// Expect one form post carrying `payload` and answer with `body`.
pub async fn mock_call(server: &mut ServerGuard, payload: &str, status: usize, body: &str) -> Mock {
    server
        .mock("POST", API_PATH)
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::UrlEncoded("req".to_string(), stub_request(payload)))
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}
