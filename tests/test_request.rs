use plainhttp::http::request::{Method, RequestBuilder};

#[test]
fn test_request_header_retrieval() {
    let req = RequestBuilder::new()
        .header("Host", "example.com")
        .header("Content-Type", "application/json")
        .build();

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_content_length_parsing() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .header("Content-Length", "42")
        .build();

    assert_eq!(req.content_length(), 42);
}

#[test]
fn test_request_content_length_missing_or_invalid() {
    assert_eq!(RequestBuilder::new().build().content_length(), 0);

    let req = RequestBuilder::new()
        .header("Content-Length", "not-a-number")
        .build();
    assert_eq!(req.content_length(), 0);
}

#[test]
fn test_request_keep_alive_default() {
    assert!(RequestBuilder::new().build().keep_alive);
}

#[test]
fn test_request_keep_alive_close() {
    let req = RequestBuilder::new().header("Connection", "close").build();
    assert!(!req.keep_alive);

    let req = RequestBuilder::new().header("connection", "CLOSE").build();
    assert!(!req.keep_alive);
}

#[test]
fn test_request_method_parse() {
    assert_eq!(Method::parse("GET"), Method::GET);
    assert_eq!(Method::parse("POST"), Method::POST);
    assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    assert_eq!(Method::parse("").as_str(), "");
    assert_eq!(Method::PATCH.to_string(), "PATCH");
}

#[test]
fn test_request_segments() {
    let req = RequestBuilder::new().path("/echo/abc").build();
    let segments: Vec<&str> = req.segments().unwrap().collect();
    assert_eq!(segments, vec!["echo", "abc"]);

    let req = RequestBuilder::new().path("/").build();
    assert_eq!(req.segments().unwrap().next(), Some(""));

    let req = RequestBuilder::new().path("").build();
    assert!(req.segments().is_none());
}
