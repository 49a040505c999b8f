use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dlview_core::headers::accept_language_headers;
use dlview_core::locale::select_locale;

// ---------------------------------------------------------------
// The header map built from a locale table must reach the wire
// exactly as the transfer engine will send it.
// ---------------------------------------------------------------

#[tokio::test]
async fn test_ru_locale_sends_accept_language_ru() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Accept-Language", "ru"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .default_headers(accept_language_headers(select_locale("ru")))
        .build()
        .unwrap();

    let response = client.get(server.uri()).send().await.unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unsupported_locale_sends_accept_language_en() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Accept-Language", "en"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::builder()
        .default_headers(accept_language_headers(select_locale("xx")))
        .build()
        .unwrap();

    let response = client.get(server.uri()).send().await.unwrap();
    assert_eq!(response.status(), 200);
}
