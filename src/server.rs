use std::{fmt::Display, io::ErrorKind, sync::Arc};

use anyhow::{Context, Result};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{
    Method, Request, Response, StatusCode,
    body::Body,
    header::{self, HeaderValue},
    server::conn::http1,
    service::service_fn,
};
use hyper_util::rt::TokioIo;
use time::{Date, OffsetDateTime};
use tokio::{
    net::TcpListener,
    signal::unix::{SignalKind, signal},
};

use crate::{
    catalog::Catalog,
    config::{Config, SiteConfig},
    contact::{
        ContactError, ContactErrorKind, ContactForm, ContactSink, ContactSubmission,
        ContactTiming, LogContactSink,
    },
    listing::{Listing, ListingState, listing_spec},
    render::{
        RenderContext,
        pages::{self, ContactView},
    },
    routes::{Route, resolve},
    timeline::{Timeline, TimelineFilter},
};

pub const DATASET_HEADER: &str = "x-folio-dataset";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Request handling for the whole site. Holds nothing mutable: every
/// response is derived from the shared catalog.
pub struct SiteServer {
    catalog: Arc<Catalog>,
    site: SiteConfig,
    timing: ContactTiming,
    sink: Arc<dyn ContactSink>,
    fixed_today: Option<Date>,
}

impl SiteServer {
    pub fn new(catalog: Arc<Catalog>, site: SiteConfig, timing: ContactTiming) -> Self {
        Self {
            catalog,
            site,
            timing,
            sink: Arc::new(LogContactSink),
            fixed_today: None,
        }
    }

    pub fn with_contact_sink(mut self, sink: Arc<dyn ContactSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Pins the date used for relative times and "new" badges.
    pub fn with_today(mut self, today: Date) -> Self {
        self.fixed_today = Some(today);
        self
    }

    fn today(&self) -> Date {
        self.fixed_today.unwrap_or_else(|| {
            OffsetDateTime::now_local()
                .unwrap_or_else(|_| OffsetDateTime::now_utc())
                .date()
        })
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            catalog: &self.catalog,
            today: self.today(),
            cv_href: self.site.cv_href(),
            new_item_days: self.site.new_item_days,
            latest_updates: self.site.latest_updates,
        }
    }

    pub async fn handle<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let route = resolve(&path);

        let response = match (&method, route) {
            (&Method::POST, Route::Contact) => self.handle_contact_post(req).await,
            (&Method::GET | &Method::HEAD, Route::File(name)) => self.serve_file(&name).await,
            (&Method::GET | &Method::HEAD, route) => self.render_page(&req, route),
            _ => plain_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
        };

        tracing::debug!(
            target: "server",
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            "request_handled"
        );
        response
    }

    fn render_page<B>(&self, req: &Request<B>, route: Route) -> Response<Full<Bytes>> {
        let ctx = self.render_context();
        let query = req.uri().query();

        let (status, html) = match route {
            Route::Home | Route::File(_) => (StatusCode::OK, pages::home(&ctx)),
            Route::About => (StatusCode::OK, pages::about(&ctx)),
            Route::Listing(category) => {
                let spec = listing_spec(category);
                let state = ListingState::from_query(query);
                let view = Listing::view(&self.catalog, &spec, &state);
                (StatusCode::OK, pages::listing(&ctx, &view))
            }
            Route::Detail { section, id } => match self.catalog.item_by_id(&id) {
                Some(item) => {
                    let share_url = share_url(req);
                    (
                        StatusCode::OK,
                        pages::detail(&ctx, item, &section, &share_url),
                    )
                }
                None => {
                    tracing::debug!(target: "server", id = %id, "detail_item_not_found");
                    (StatusCode::NOT_FOUND, pages::not_found(&ctx))
                }
            },
            Route::Timeline => {
                let filter = TimelineFilter::from_query(query);
                let timeline = Timeline::build(&self.catalog, &filter);
                (StatusCode::OK, pages::timeline(&ctx, &timeline, &filter))
            }
            Route::Contact => {
                let values = ContactSubmission::default();
                (
                    StatusCode::OK,
                    pages::contact(
                        &ctx,
                        &ContactView::Form {
                            values: &values,
                            error: None,
                        },
                    ),
                )
            }
        };

        self.html_response(status, html)
    }

    async fn handle_contact_post<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: Display,
    {
        let ctx = self.render_context();
        let body = match req.into_body().collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                tracing::warn!(target: "server", error = %err, "contact_body_read_failed");
                return plain_response(StatusCode::BAD_REQUEST, "unable to read request body");
            }
        };

        let submission: ContactSubmission = match serde_urlencoded::from_bytes(&body) {
            Ok(submission) => submission,
            Err(err) => {
                let error = ContactError::new(
                    ContactErrorKind::Validation,
                    format!("malformed form body: {err}"),
                );
                let values = ContactSubmission::default();
                let html = pages::contact(
                    &ctx,
                    &ContactView::Form {
                        values: &values,
                        error: Some(&error),
                    },
                );
                return self.html_response(StatusCode::BAD_REQUEST, html);
            }
        };

        let mut form = ContactForm::new(self.timing, Arc::clone(&self.sink));
        if let Err(err) = form.fill(submission.clone()) {
            return self.contact_failure(&ctx, &submission, &err);
        }

        match form.submit().await {
            Ok(receipt) => {
                let html = pages::contact(
                    &ctx,
                    &ContactView::Submitted {
                        receipt: &receipt,
                        reset_after: self.timing.reset_delay,
                    },
                );
                self.html_response(StatusCode::OK, html)
            }
            Err(err) => self.contact_failure(&ctx, &submission, &err),
        }
    }

    fn contact_failure(
        &self,
        ctx: &RenderContext<'_>,
        values: &ContactSubmission,
        error: &ContactError,
    ) -> Response<Full<Bytes>> {
        let status = match error.kind {
            ContactErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ContactErrorKind::InvalidState => StatusCode::CONFLICT,
            ContactErrorKind::Delivery => {
                tracing::warn!(target: "server", error = %error, "contact_delivery_failed");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        let html = pages::contact(
            ctx,
            &ContactView::Form {
                values,
                error: Some(error),
            },
        );
        self.html_response(status, html)
    }

    async fn serve_file(&self, name: &str) -> Response<Full<Bytes>> {
        if !is_safe_file_name(name) {
            return plain_response(StatusCode::NOT_FOUND, "not found");
        }

        let path = self.site.files_dir.join(name);
        match tokio::fs::read(&path).await {
            Ok(content) => {
                let mut response = Response::new(Full::new(Bytes::from(content)));
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(content_type_for(name)),
                );
                response
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                plain_response(StatusCode::NOT_FOUND, "not found")
            }
            Err(err) => {
                tracing::warn!(
                    target: "server",
                    path = %path.display(),
                    error = %err,
                    "file_read_failed"
                );
                plain_response(StatusCode::INTERNAL_SERVER_ERROR, "unable to read file")
            }
        }
    }

    fn html_response(&self, status: StatusCode, html: String) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from(html)));
        *response.status_mut() = status;
        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(HTML_CONTENT_TYPE),
        );
        if let Ok(value) = HeaderValue::from_str(self.catalog.fingerprint()) {
            headers.insert(DATASET_HEADER, value);
        }
        response
    }
}

fn plain_response(status: StatusCode, message: &'static str) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from_static(message.as_bytes())));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}

fn share_url<B>(req: &Request<B>) -> String {
    let path = req.uri().path();
    match req
        .headers()
        .get(header::HOST)
        .and_then(|host| host.to_str().ok())
    {
        Some(host) => format!("http://{host}{path}"),
        None => path.to_string(),
    }
}

fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

fn content_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

pub async fn run(config: Config, catalog: Catalog) -> Result<()> {
    let server = Arc::new(SiteServer::new(
        Arc::new(catalog),
        config.site.clone(),
        config.contact.timing(),
    ));
    let listener = TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("unable to bind {}", config.server.bind_addr))?;

    let mut sigint =
        signal(SignalKind::interrupt()).context("unable to listen for SIGINT (Ctrl+C)")?;
    let mut sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;

    eprintln!("folio listening on http://{}", config.server.bind_addr);
    tracing::info!(
        target: "server",
        addr = %config.server.bind_addr,
        "server_listening"
    );

    let signal_name = loop {
        tokio::select! {
            _ = sigint.recv() => break "SIGINT",
            _ = sigterm.recv() => break "SIGTERM",
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, remote_addr)) => {
                        let io = TokioIo::new(stream);
                        let server = Arc::clone(&server);
                        tokio::spawn(async move {
                            let service = service_fn(move |req| {
                                let server = Arc::clone(&server);
                                async move {
                                    Ok::<_, hyper::Error>(server.handle(req).await)
                                }
                            });
                            if let Err(err) = http1::Builder::new()
                                .serve_connection(io, service)
                                .await
                            {
                                tracing::warn!(
                                    target: "server",
                                    addr = %remote_addr,
                                    error = %err,
                                    "connection_failed"
                                );
                            }
                        });
                    }
                    Err(err) => {
                        tracing::warn!(target: "server", error = %err, "accept_failed");
                    }
                }
            }
        }
    };

    tracing::info!(target: "server", signal = signal_name, "server_stopped");
    eprintln!("folio stopped: received {signal_name}");

    Ok(())
}
