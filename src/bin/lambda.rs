//! AWS Lambda HTTP handler for impact projections
//!
//! POST a JSON `SimulationConfig` (missing fields default, empty body means
//! all defaults). Returns a JSON run report, or the CSV table when called
//! with `?format=csv`.

use impact_simulator::report::{ExportCache, RunReport, EXPORT_FILE_NAME};
use impact_simulator::{project, SimulationConfig};
use lambda_http::{run, service_fn, Body, Request, RequestExt, Response};
use lambda_runtime::Error;
use log::{info, warn};
use serde_json::json;
use std::sync::{Arc, Mutex};

fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    warn!("Rejected request: {}", message);
    json_response(400, json!({ "error": message }).to_string())
}

fn parse_config(body: &[u8]) -> Result<SimulationConfig, String> {
    let config = if body.iter().all(u8::is_ascii_whitespace) {
        SimulationConfig::default()
    } else {
        serde_json::from_slice(body).map_err(|e| format!("invalid config JSON: {e}"))?
    };
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn handle(event: &Request, cache: &Mutex<ExportCache>) -> Result<Response<Body>, Error> {
    let config = match parse_config(event.body().as_ref()) {
        Ok(config) => config,
        Err(message) => return bad_request(message),
    };

    let wants_csv = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("format"))
        .is_some_and(|format| format.eq_ignore_ascii_case("csv"));

    if wants_csv {
        let bytes = {
            let mut cache = cache.lock().map_err(|_| "export cache lock poisoned")?;
            cache.get_or_export(&config)?
        };
        info!("Serving CSV export ({} bytes)", bytes.len());
        return Ok(Response::builder()
            .status(200)
            .header("content-type", "text/csv")
            .header(
                "content-disposition",
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            )
            .body(Body::from(bytes.to_vec()))?);
    }

    let report = RunReport::new(config, project(&config));
    json_response(200, report.to_json_pretty()?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let cache = Arc::new(Mutex::new(ExportCache::new()));
    run(service_fn(move |event: Request| {
        let cache = Arc::clone(&cache);
        async move { handle(&event, &cache) }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn body_text(response: &Response<Body>) -> String {
        String::from_utf8(response.body().as_ref().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_body_uses_defaults() {
        let cache = Mutex::new(ExportCache::new());
        let response = handle(&Request::new(Body::Empty), &cache).unwrap();
        assert_eq!(response.status(), 200);

        let json: serde_json::Value = serde_json::from_str(&body_text(&response)).unwrap();
        assert_eq!(json["years"].as_array().map(Vec::len), Some(20));
    }

    #[test]
    fn test_out_of_range_is_bad_request() {
        let cache = Mutex::new(ExportCache::new());
        let request = Request::new(Body::from(r#"{"growthRate": 0.5}"#));
        let response = handle(&request, &cache).unwrap();

        assert_eq!(response.status(), 400);
        assert!(body_text(&response).contains("growthRate"));
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let cache = Mutex::new(ExportCache::new());
        let request = Request::new(Body::from("{ nope"));
        let response = handle(&request, &cache).unwrap();
        assert_eq!(response.status(), 400);
    }

    #[test]
    fn test_csv_format_uses_cache() {
        let cache = Mutex::new(ExportCache::new());
        let query = HashMap::from([("format".to_string(), "csv".to_string())]);

        for _ in 0..2 {
            let request = Request::new(Body::from(r#"{"timeSteps": 5}"#))
                .with_query_string_parameters(query.clone());
            let response = handle(&request, &cache).unwrap();

            assert_eq!(response.status(), 200);
            assert_eq!(response.headers()["content-type"], "text/csv");
            assert_eq!(body_text(&response).lines().count(), 6);
        }

        let cache = cache.lock().unwrap();
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
    }
}
