use waypoint::http::response::{Response, ResponseBuilder, StatusCode};
use waypoint::http::writer::ResponseWriter;

async fn write_out(response: &Response) -> String {
    let mut sink: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(response);
    writer.write_to_stream(&mut sink).await.unwrap();
    String::from_utf8(sink).unwrap()
}

#[tokio::test]
async fn test_writes_status_line_headers_and_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body(b"hi".to_vec())
        .build();

    let wire = write_out(&response).await;

    assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(wire.contains("Content-Type: text/plain\r\n"));
    assert!(wire.contains("Content-Length: 2\r\n"));
    assert!(wire.ends_with("\r\n\r\nhi"));
}

#[tokio::test]
async fn test_adds_content_length_for_handler_built_responses() {
    // Handlers mutate a bare Response and never set Content-Length
    // themselves; the writer fills it in at serialization time.
    let mut response = Response::new();
    response.write_body(b"hello world");

    let wire = write_out(&response).await;

    assert!(wire.contains("Content-Length: 11\r\n"));
}

#[tokio::test]
async fn test_respects_explicit_content_length() {
    let mut response = Response::new();
    response.set_header("Content-Length", "999");
    response.write_body(b"hi");

    let wire = write_out(&response).await;

    assert!(wire.contains("Content-Length: 999\r\n"));
    assert_eq!(wire.matches("Content-Length").count(), 1);
}

#[tokio::test]
async fn test_error_status_line() {
    let wire = write_out(&Response::not_found()).await;

    assert!(wire.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(wire.ends_with("404 Not Found"));
}
