//! Test utilities for the storefront crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when running tests or
//! with the `test-support` feature.

pub mod stub_upstream {
    //! In-process stand-in for the storefront backend API.
    //!
    //! The stub binds an ephemeral loopback port, answers each configured
    //! path with a canned status and JSON body, and records every request so
    //! tests can assert on what the adapter sent.

    use std::net::TcpListener;
    use std::sync::Mutex;
    use std::time::Duration;

    use actix_web::dev::ServerHandle;
    use actix_web::http::StatusCode;
    use actix_web::http::header::CACHE_CONTROL;
    use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
    use serde_json::Value;
    use url::Url;

    /// Response served for one path.
    #[derive(Debug, Clone)]
    pub struct CannedResponse {
        path: String,
        status: StatusCode,
        body: String,
        delay: Duration,
    }

    impl CannedResponse {
        /// Answer `path` with `status` and the JSON `body`.
        pub fn json(path: impl Into<String>, status: u16, body: &Value) -> Self {
            Self::raw(path, status, body.to_string())
        }

        /// Answer `path` with `status` and an arbitrary body.
        pub fn raw(path: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
            Self {
                path: path.into(),
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body: body.into(),
                delay: Duration::ZERO,
            }
        }

        /// Hold the response back for `delay` before answering.
        #[must_use]
        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    /// A request observed by the stub.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: String,
        pub path: String,
        pub query: String,
        pub cache_control: Option<String>,
        /// JSON body, or `Value::Null` when the body was empty or not JSON.
        pub body: Value,
    }

    struct StubState {
        routes: Vec<CannedResponse>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl StubState {
        fn record(&self, req: &HttpRequest, body: &[u8]) {
            let recorded = RecordedRequest {
                method: req.method().to_string(),
                path: req.path().to_owned(),
                query: req.query_string().to_owned(),
                cache_control: req
                    .headers()
                    .get(CACHE_CONTROL)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_owned),
                body: serde_json::from_slice(body).unwrap_or(Value::Null),
            };
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(recorded);
            }
        }
    }

    async fn dispatch(
        req: HttpRequest,
        body: web::Bytes,
        state: web::Data<StubState>,
    ) -> HttpResponse {
        state.record(&req, &body);
        let Some(canned) = state.routes.iter().find(|route| route.path == req.path()) else {
            return HttpResponse::NotFound().json(serde_json::json!({ "error": "no stub route" }));
        };
        if !canned.delay.is_zero() {
            actix_web::rt::time::sleep(canned.delay).await;
        }
        HttpResponse::build(canned.status)
            .content_type("application/json")
            .body(canned.body.clone())
    }

    /// Running stub server.
    pub struct StubUpstream {
        base_url: Url,
        state: web::Data<StubState>,
        handle: ServerHandle,
    }

    impl StubUpstream {
        /// Start a stub serving `routes` on an ephemeral loopback port.
        ///
        /// Must be called from within an actix system, for example inside
        /// `#[actix_web::test]`.
        pub fn start(routes: Vec<CannedResponse>) -> std::io::Result<Self> {
            let listener = TcpListener::bind("127.0.0.1:0")?;
            let addr = listener.local_addr()?;
            let state = web::Data::new(StubState {
                routes,
                requests: Mutex::new(Vec::new()),
            });
            let server_state = state.clone();
            let server = HttpServer::new(move || {
                App::new()
                    .app_data(server_state.clone())
                    .default_service(web::to(dispatch))
            })
            .workers(1)
            .listen(listener)?
            .run();
            let handle = server.handle();
            actix_web::rt::spawn(server);
            let base_url = Url::parse(&format!("http://{addr}/"))
                .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;
            Ok(Self {
                base_url,
                state,
                handle,
            })
        }

        /// Base URL the adapter under test should be pointed at.
        pub fn base_url(&self) -> Url {
            self.base_url.clone()
        }

        /// Requests received so far, in arrival order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.state
                .requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }

        /// Requests received for `path`.
        pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
            self.requests()
                .into_iter()
                .filter(|request| request.path == path)
                .collect()
        }

        /// Stop the server without waiting for in-flight requests.
        pub async fn stop(self) {
            self.handle.stop(false).await;
        }
    }

    /// Base URL of a loopback port with nothing listening on it.
    pub fn unreachable_base_url() -> std::io::Result<Url> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);
        Url::parse(&format!("http://{addr}/"))
            .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))
    }
}
