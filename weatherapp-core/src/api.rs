use std::{
    io::Write,
    path::{Path, PathBuf},
};

use reqwest::Url;
use tracing::{debug, warn};

use crate::{
    downloader::Downloader,
    error::IconError,
    model::WeatherReport,
    parser::{DataParser, JsonDataParser},
    sink::IconSink,
};

/// Turns downloaded payloads into reports and icon files.
///
/// Holds no state besides the parser, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ApiService<P = JsonDataParser> {
    parser: P,
}

impl ApiService<JsonDataParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: DataParser> ApiService<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    /// Download and assemble the current-weather report behind `uri`.
    ///
    /// Never fails: a missing downloader, URL or payload produces a report with
    /// every field at its default.
    pub async fn current_weather(
        &self,
        downloader: Option<&dyn Downloader>,
        uri: Option<&Url>,
    ) -> WeatherReport {
        let Some(bytes) = response_bytes(downloader, uri).await else {
            return WeatherReport::new();
        };

        let response = String::from_utf8_lossy(&bytes);
        if response.is_empty() {
            debug!("Empty response, returning default report");
            return WeatherReport::new();
        }

        self.assemble(&response)
    }

    /// Build a report by running every parser operation over `response`.
    pub fn assemble(&self, response: &str) -> WeatherReport {
        let raw = Some(response);
        let mut report = WeatherReport::new();

        report.set_coordinates(self.parser.parse_coordinates(raw));
        report.set_system_info(self.parser.parse_system_info(raw));
        for item in self.parser.parse_conditions(raw) {
            report.add_condition(item);
        }
        report.set_main(self.parser.parse_main(raw));
        report.set_wind(self.parser.parse_wind(raw));
        report.set_rain(self.parser.parse_rain(raw));
        report.set_clouds(self.parser.parse_clouds(raw));
        report.set_received_at(self.parser.parse_received_at(raw));
        report.set_city_id(self.parser.parse_city_id(raw));
        report.set_city_name(self.parser.parse_city_name(raw));
        report.set_status_code(self.parser.parse_status_code(raw));

        report
    }

    /// Download the icon behind `uri` and store it through `sink`.
    ///
    /// `Ok(None)` means the server provided no icon. Failing to store the bytes
    /// is an error.
    pub async fn weather_icon(
        &self,
        downloader: Option<&dyn Downloader>,
        uri: Option<&Url>,
        sink: &dyn IconSink,
    ) -> Result<Option<PathBuf>, IconError> {
        let Some(bytes) = response_bytes(downloader, uri).await else {
            return Ok(None);
        };

        let path = store(sink, &bytes)?;
        Ok(Some(path))
    }
}

async fn response_bytes(downloader: Option<&dyn Downloader>, uri: Option<&Url>) -> Option<Vec<u8>> {
    let Some(downloader) = downloader else {
        warn!("No downloader configured");
        return None;
    };
    let Some(uri) = uri else {
        warn!("No request URL provided");
        return None;
    };

    downloader.download(uri).await
}

/// Write `bytes` to a new sink target. The writer is dropped before this
/// returns, whatever the outcome.
fn store(sink: &dyn IconSink, bytes: &[u8]) -> Result<PathBuf, IconError> {
    let (path, mut writer) = sink.create().map_err(IconError::Create)?;

    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|source| IconError::Write { path: path.clone(), source })?;
    drop(writer);

    absolute(&path)
}

fn absolute(path: &Path) -> Result<PathBuf, IconError> {
    std::path::absolute(path)
        .map_err(|source| IconError::Resolve { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Coordinates, SystemInfo};
    use async_trait::async_trait;
    use std::{
        io,
        sync::{
            Arc, Mutex,
            atomic::{AtomicBool, AtomicUsize, Ordering},
        },
    };

    #[derive(Debug)]
    struct Canned(Option<Vec<u8>>);

    #[async_trait]
    impl Downloader for Canned {
        async fn download(&self, _uri: &Url) -> Option<Vec<u8>> {
            self.0.clone()
        }
    }

    #[derive(Debug, Default)]
    struct Counting(AtomicUsize);

    #[async_trait]
    impl Downloader for Counting {
        async fn download(&self, _uri: &Url) -> Option<Vec<u8>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Some(br#"{"name":"Shuzenji"}"#.to_vec())
        }
    }

    /// Writer that records being dropped and can be told to fail.
    struct Tracked {
        fail: bool,
        written: Arc<Mutex<Vec<u8>>>,
        released: Arc<AtomicBool>,
    }

    impl Write for Tracked {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::other("disk full"));
            }
            self.written.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct MemorySink {
        fail: bool,
        written: Arc<Mutex<Vec<u8>>>,
        released: Arc<AtomicBool>,
    }

    impl IconSink for MemorySink {
        fn create(&self) -> io::Result<(PathBuf, Box<dyn Write + Send>)> {
            let writer = Tracked {
                fail: self.fail,
                written: self.written.clone(),
                released: self.released.clone(),
            };
            Ok((PathBuf::from("icons/123.png"), Box::new(writer)))
        }
    }

    struct BrokenSink;

    impl IconSink for BrokenSink {
        fn create(&self) -> io::Result<(PathBuf, Box<dyn Write + Send>)> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn url() -> Url {
        Url::parse("http://api.openweathermap.org/data/2.5/weather?q=Shuzenji").unwrap()
    }

    #[tokio::test]
    async fn missing_collaborators_give_default_report() {
        let api = ApiService::new();
        let downloader = Canned(Some(br#"{"name":"Shuzenji"}"#.to_vec()));
        let uri = url();

        assert_eq!(api.current_weather(None, Some(&uri)).await, WeatherReport::default());
        assert_eq!(api.current_weather(Some(&downloader), None).await, WeatherReport::default());
    }

    #[tokio::test]
    async fn missing_or_empty_payload_gives_default_report() {
        let api = ApiService::new();
        let uri = url();

        let nothing = Canned(None);
        assert_eq!(api.current_weather(Some(&nothing), Some(&uri)).await, WeatherReport::default());

        let empty = Canned(Some(Vec::new()));
        assert_eq!(api.current_weather(Some(&empty), Some(&uri)).await, WeatherReport::default());
    }

    #[tokio::test]
    async fn downloads_once_per_report() {
        let api = ApiService::new();
        let downloader = Counting::default();

        let report = api.current_weather(Some(&downloader), Some(&url())).await;

        assert_eq!(downloader.0.load(Ordering::SeqCst), 1);
        assert_eq!(report.city_name(), "Shuzenji");
    }

    #[tokio::test]
    async fn invalid_utf8_is_decoded_lossily() {
        let api = ApiService::new();
        let mut bytes = br#"{"name":"Shuzenji","coord":{"lat":35,"lon":139}}"#.to_vec();
        bytes.push(0xFF);
        let downloader = Canned(Some(bytes));

        let report = api.current_weather(Some(&downloader), Some(&url())).await;

        // Trailing garbage makes the document invalid as a whole.
        assert_eq!(report.coordinates(), &Coordinates::default());
        assert_eq!(report.city_name(), "");
    }

    #[test]
    fn assemble_merges_every_section() {
        let report = ApiService::new().assemble(
            r#"{"coord":{"lat":35,"lon":139},"sys":{"country":"JP"},"weather":[{"id":804},{"id":500}],"cod":404}"#,
        );

        assert_eq!(report.coordinates(), &Coordinates::new(Some(35.0), Some(139.0)));
        assert_eq!(report.system_info(), &SystemInfo::new(Some("JP".into()), 0, 0));
        assert_eq!(report.conditions_len(), 2);
        assert_eq!(report.condition_at(1).id(), 500);
        assert_eq!(report.status_code(), 404);
    }

    #[test]
    fn custom_parser_is_used_for_assembly() {
        #[derive(Debug)]
        struct FixedName;

        impl DataParser for FixedName {
            fn parse_coordinates(&self, _: Option<&str>) -> Coordinates {
                Coordinates::default()
            }
            fn parse_system_info(&self, _: Option<&str>) -> SystemInfo {
                SystemInfo::default()
            }
            fn parse_conditions(&self, _: Option<&str>) -> Vec<crate::model::ConditionItem> {
                Vec::new()
            }
            fn parse_main(&self, _: Option<&str>) -> crate::model::MainMeasurements {
                Default::default()
            }
            fn parse_wind(&self, _: Option<&str>) -> crate::model::Wind {
                Default::default()
            }
            fn parse_rain(&self, _: Option<&str>) -> crate::model::Rain {
                Default::default()
            }
            fn parse_clouds(&self, _: Option<&str>) -> crate::model::Clouds {
                Default::default()
            }
            fn parse_received_at(&self, _: Option<&str>) -> Option<f64> {
                Some(-10.0)
            }
            fn parse_city_id(&self, _: Option<&str>) -> i64 {
                -1
            }
            fn parse_city_name(&self, _: Option<&str>) -> String {
                "Fixed".to_string()
            }
            fn parse_status_code(&self, _: Option<&str>) -> i64 {
                0
            }
        }

        let report = ApiService::with_parser(FixedName).assemble("anything");

        assert_eq!(report.city_name(), "Fixed");
        // Bounds are still applied by the report setters.
        assert_eq!(report.received_at(), None);
        assert_eq!(report.city_id(), 0);
        assert_eq!(report.status_code(), 200);
    }

    #[tokio::test]
    async fn no_icon_bytes_is_not_an_error() {
        let api = ApiService::new();
        let sink = MemorySink::default();

        let path = api.weather_icon(Some(&Canned(None)), Some(&url()), &sink).await.unwrap();

        assert!(path.is_none());
        assert!(sink.written.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn icon_bytes_are_written_and_sink_released() {
        let api = ApiService::new();
        let sink = MemorySink::default();
        let downloader = Canned(Some(vec![0x89, b'P', b'N', b'G']));

        let path = api.weather_icon(Some(&downloader), Some(&url()), &sink).await.unwrap();

        let path = path.expect("icon path");
        assert!(path.is_absolute());
        assert!(path.ends_with("icons/123.png"));
        assert_eq!(*sink.written.lock().unwrap(), vec![0x89, b'P', b'N', b'G']);
        assert!(sink.released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn write_failure_is_reported_and_sink_released() {
        let api = ApiService::new();
        let sink = MemorySink { fail: true, ..Default::default() };
        let downloader = Canned(Some(vec![1, 2, 3]));

        let err = api.weather_icon(Some(&downloader), Some(&url()), &sink).await.unwrap_err();

        assert!(matches!(err, IconError::Write { .. }));
        assert!(sink.released.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn sink_creation_failure_is_reported() {
        let api = ApiService::new();
        let downloader = Canned(Some(vec![1, 2, 3]));

        let err = api.weather_icon(Some(&downloader), Some(&url()), &BrokenSink).await.unwrap_err();

        assert!(matches!(err, IconError::Create(_)));
    }
}
