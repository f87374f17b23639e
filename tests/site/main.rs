mod contact;
mod files;

use std::{path::PathBuf, sync::Arc};

use bytes::Bytes;
use folio::{
    catalog::Catalog, config::SiteConfig, contact::ContactTiming, server::SiteServer,
};
use http_body_util::{BodyExt, Full};
use hyper::{HeaderMap, Method, Request, StatusCode, header};
use time::macros::date;
use uuid::Uuid;

pub fn fixture_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.json");
    Catalog::load(&path).expect("fixture dataset should load")
}

pub fn unique_files_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-files-{}", Uuid::now_v7()));
    std::fs::create_dir_all(&dir).expect("files dir should be created");
    dir
}

pub fn server_with_files(files_dir: PathBuf) -> SiteServer {
    let site = SiteConfig {
        files_dir,
        ..SiteConfig::default()
    };
    SiteServer::new(Arc::new(fixture_catalog()), site, ContactTiming::default())
        .with_today(date!(2023 - 05 - 10))
}

pub fn server() -> SiteServer {
    server_with_files(std::env::temp_dir().join("folio-files-absent"))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(server: &SiteServer, method: Method, uri: &str, body: &str) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:8080");
    if !body.is_empty() {
        builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }
    let request = builder
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("request should build");

    let response = server.handle(request).await;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(server: &SiteServer, uri: &str) -> TestResponse {
    send(server, Method::GET, uri, "").await
}
