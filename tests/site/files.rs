use hyper::{StatusCode, header};

use crate::{get, server_with_files, unique_files_dir};

#[tokio::test]
async fn given_existing_file_when_requested_then_served_with_content_type() {
    let dir = unique_files_dir();
    std::fs::write(dir.join("cv.pdf"), b"%PDF-1.4 test").expect("file should be written");

    let response = get(&server_with_files(dir.clone()), "/files/cv.pdf").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::CONTENT_TYPE).map(|value| value.as_bytes()),
        Some("application/pdf".as_bytes())
    );
    assert_eq!(&response.body[..], b"%PDF-1.4 test");

    std::fs::remove_dir_all(dir).expect("files dir should be removed");
}

#[tokio::test]
async fn given_missing_or_hidden_file_when_requested_then_not_found() {
    let dir = unique_files_dir();
    std::fs::write(dir.join(".secret"), b"hidden").expect("file should be written");
    let server = server_with_files(dir.clone());

    assert_eq!(get(&server, "/files/missing.pdf").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&server, "/files/.secret").await.status, StatusCode::NOT_FOUND);
    assert_eq!(get(&server, "/files/..").await.status, StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(dir).expect("files dir should be removed");
}
