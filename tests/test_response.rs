use std::io::Write;

use waypoint::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_numbers() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NoContent.as_u16(), 204);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrases() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_new_response_is_empty_200() {
    let res = Response::new();

    assert_eq!(res.status, StatusCode::Ok);
    assert!(res.headers.is_empty());
    assert!(res.body.is_empty());
}

#[test]
fn test_mutable_response_surface() {
    let mut res = Response::new();
    res.set_status(StatusCode::Created);
    res.set_header("Content-Type", "text/plain");
    res.write_body(b"hello ");
    res.write_body(b"world");

    assert_eq!(res.status, StatusCode::Created);
    assert_eq!(res.headers.get("Content-Type").unwrap(), "text/plain");
    assert_eq!(res.body, b"hello world".to_vec());
}

#[test]
fn test_set_header_replaces_value() {
    let mut res = Response::new();
    res.set_header("Cache-Control", "no-cache");
    res.set_header("Cache-Control", "max-age=60");

    assert_eq!(res.headers.get("Cache-Control").unwrap(), "max-age=60");
}

#[test]
fn test_append_header_joins_values() {
    let mut res = Response::new();
    res.append_header("Vary", "Accept");
    res.append_header("Vary", "Accept-Encoding");

    assert_eq!(res.headers.get("Vary").unwrap(), "Accept, Accept-Encoding");
}

#[test]
fn test_response_is_a_writable_stream() {
    let mut res = Response::new();
    write!(res, "count = {}", 3).unwrap();

    assert_eq!(res.body, b"count = 3".to_vec());
}

#[test]
fn test_builder_auto_content_length() {
    let body = b"This is the body".to_vec();
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(body.clone())
        .build();

    let content_length = response.headers.get("Content-Length").unwrap();
    assert_eq!(content_length, &body.len().to_string());
}

#[test]
fn test_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.headers.get("Content-Length").unwrap(), "999");
}

#[test]
fn test_builder_with_headers() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/json")
        .header("Cache-Control", "no-cache")
        .body(b"{}".to_vec())
        .build();

    assert_eq!(
        response.headers.get("Content-Type").unwrap(),
        "application/json"
    );
    assert_eq!(response.headers.get("Cache-Control").unwrap(), "no-cache");
    assert_eq!(response.headers.len(), 3); // 2 custom + auto Content-Length
}

#[test]
fn test_ok_helper() {
    let response = Response::ok("test content");

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.body, b"test content".to_vec());
}

#[test]
fn test_not_found_helper() {
    let response = Response::not_found();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(response.body, b"404 Not Found".to_vec());
}

#[test]
fn test_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"500 Internal Server Error".to_vec());
}
