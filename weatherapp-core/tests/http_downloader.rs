use std::time::Duration;

use serde_json::json;
use weatherapp_core::{
    ApiService, Downloader, HttpDownloader, Url, UrlBuilder, UrlRequestParameters, WeatherReport,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn builder(server: &MockServer) -> UrlBuilder {
    UrlBuilder::new(
        Url::parse(&format!("{}/data/2.5/weather", server.uri())).unwrap(),
        Url::parse(&format!("{}/img/w/", server.uri())).unwrap(),
        Some("TEST_KEY".to_string()),
    )
}

#[tokio::test]
async fn fetches_and_assembles_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Shuzenji,JP"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "coord": { "lon": 139, "lat": 35 },
            "weather": [{ "id": 804, "main": "clouds", "description": "overcast clouds", "icon": "04n" }],
            "main": { "temp": 289.5, "humidity": 89, "pressure": 1013 },
            "id": 1851632,
            "name": "Shuzenji",
            "cod": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = builder(&server)
        .weather_by_city(&UrlRequestParameters::new("Shuzenji", Some("JP".into())));
    let downloader = HttpDownloader::new();

    let report = ApiService::new().current_weather(Some(&downloader), Some(&uri)).await;

    assert_eq!(report.city_name(), "Shuzenji");
    assert_eq!(report.city_id(), 1851632);
    assert_eq!(report.condition_at(0).icon(), "04n");
    assert_eq!(report.main().temperature(), Some(289.5));
}

#[tokio::test]
async fn error_status_yields_default_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let uri = builder(&server).weather_by_city(&UrlRequestParameters::new("Atlantis", None));
    let downloader = HttpDownloader::new();

    assert!(downloader.download(&uri).await.is_none());

    let report = ApiService::new().current_weather(Some(&downloader), Some(&uri)).await;
    assert_eq!(report, WeatherReport::default());
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let uri = Url::parse(&format!("{}/slow", server.uri())).unwrap();
    let downloader = HttpDownloader::with_timeout(Duration::from_millis(100));

    assert!(downloader.download(&uri).await.is_none());
}

#[tokio::test]
async fn downloads_icon_bytes() {
    let server = MockServer::start().await;
    let png = vec![0x89, b'P', b'N', b'G'];

    Mock::given(method("GET"))
        .and(path("/img/w/04n.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png.clone()))
        .mount(&server)
        .await;

    let uri = builder(&server).weather_icon("04n");
    let dir = tempfile::tempdir().unwrap();
    let sink = weatherapp_core::TempDirSink::new(dir.path());

    let stored = ApiService::new()
        .weather_icon(Some(&HttpDownloader::new()), Some(&uri), &sink)
        .await
        .unwrap()
        .expect("icon should be stored");

    assert_eq!(std::fs::read(stored).unwrap(), png);
}
