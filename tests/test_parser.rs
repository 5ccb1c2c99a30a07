use tinyhttp::http::error::ParseError;
use tinyhttp::http::parser::{parse_request, read_line};
use tinyhttp::http::request::Method;

#[tokio::test]
async fn test_parse_simple_get_request() {
    let mut req: &[u8] = b"GET /echo/hello HTTP/1.1\r\nHost: localhost\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.start_line.method, Method::GET);
    assert_eq!(parsed.start_line.path, "/echo/hello");
    assert_eq!(parsed.start_line.version, "HTTP/1.1");
    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.headers.get("Host").unwrap(), "localhost");
    assert!(parsed.body.is_none());
}

#[tokio::test]
async fn test_parse_post_request_with_body() {
    let mut req: &[u8] = b"POST /files/a.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.start_line.method, Method::POST);
    assert_eq!(parsed.body.as_deref(), Some(&b"hello"[..]));
    assert!(req.is_empty());
}

#[tokio::test]
async fn test_parse_body_reads_exactly_content_length() {
    let mut req: &[u8] = b"POST / HTTP/1.1\r\nContent-Length: 3\r\n\r\nabcdef";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.body(), b"abc");
    assert_eq!(req, b"def");
}

#[tokio::test]
async fn test_parse_binary_body() {
    let mut req: &[u8] = b"POST /upload HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\r\n\x03";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.body(), b"\x00\r\n\x03");
}

#[tokio::test]
async fn test_parse_zero_content_length_gives_empty_body() {
    let mut req: &[u8] = b"POST /api HTTP/1.1\r\nContent-Length: 0\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.body.as_deref(), Some(&b""[..]));
}

#[tokio::test]
async fn test_parse_non_numeric_content_length_means_no_body() {
    let mut req: &[u8] = b"POST /api HTTP/1.1\r\nContent-Length: lots\r\n\r\nleftover";
    let parsed = parse_request(&mut req).await.unwrap();

    assert!(parsed.body.is_none());
    assert_eq!(req, b"leftover");
}

#[tokio::test]
async fn test_parse_short_body_is_body_read_error() {
    let mut req: &[u8] = b"POST /api HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::BodyReadError(_))));
}

#[tokio::test]
async fn test_parse_huge_content_length_with_short_body_is_body_read_error() {
    let mut req: &[u8] = b"POST /files/a HTTP/1.1\r\nContent-Length: 70368744177664\r\n\r\nhi";
    let result = parse_request(&mut req).await;

    match result {
        Err(ParseError::BodyReadError(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof)
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_parse_content_length_at_usize_max_is_body_read_error() {
    let req = format!("POST / HTTP/1.1\r\nContent-Length: {}\r\n\r\nx", usize::MAX);
    let mut bytes = req.as_bytes();

    let result = parse_request(&mut bytes).await;

    assert!(matches!(result, Err(ParseError::BodyReadError(_))));
}

#[tokio::test]
async fn test_parse_any_method_token_is_accepted() {
    let mut req: &[u8] = b"BREW /pot HTTP/1.1\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.start_line.method, Method::Extension("BREW".to_string()));
    assert_eq!(parsed.method().as_str(), "BREW");
}

#[tokio::test]
async fn test_parse_start_line_tokens_are_not_validated() {
    let mut req: &[u8] = b"a b c\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.method().as_str(), "a");
    assert_eq!(parsed.path(), "b");
    assert_eq!(parsed.version(), "c");
}

#[tokio::test]
async fn test_parse_start_line_with_two_tokens_is_malformed() {
    let mut req: &[u8] = b"GET /\r\n\r\n";
    let result = parse_request(&mut req).await;

    match result {
        Err(ParseError::MalformedStartLine(line)) => assert_eq!(line, "GET /"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_parse_start_line_with_four_tokens_is_malformed() {
    let mut req: &[u8] = b"GET / HTTP/1.1 extra\r\n\r\n";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::MalformedStartLine(_))));
}

#[tokio::test]
async fn test_parse_start_line_with_double_space_is_malformed() {
    let mut req: &[u8] = b"GET  / HTTP/1.1\r\n\r\n";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::MalformedStartLine(_))));
}

#[tokio::test]
async fn test_parse_multiple_headers() {
    let mut req: &[u8] =
        b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.headers.len(), 3);
    assert_eq!(parsed.header("Host"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent"), Some("test-client"));
    assert_eq!(parsed.header("Accept"), Some("*/*"));
}

#[tokio::test]
async fn test_parse_header_names_are_case_sensitive() {
    let mut req: &[u8] = b"GET / HTTP/1.1\r\nuser-agent: lower\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.header("user-agent"), Some("lower"));
    assert_eq!(parsed.header("User-Agent"), None);
}

#[tokio::test]
async fn test_parse_repeated_header_overwrites() {
    let mut req: &[u8] = b"GET / HTTP/1.1\r\nX-Tag: first\r\nX-Tag: second\r\n\r\n";
    let parsed = parse_request(&mut req).await.unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("X-Tag"), Some("second"));
}

#[tokio::test]
async fn test_parse_header_without_space_after_colon_is_malformed() {
    let mut req: &[u8] = b"GET / HTTP/1.1\r\nHost:example.com\r\n\r\n";
    let result = parse_request(&mut req).await;

    match result {
        Err(ParseError::MalformedHeaderLine(line)) => assert_eq!(line, "Host:example.com"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_parse_header_value_containing_separator_is_malformed() {
    let mut req: &[u8] = b"GET / HTTP/1.1\r\nX-Note: a: b\r\n\r\n";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::MalformedHeaderLine(_))));
}

#[tokio::test]
async fn test_parse_stream_ending_mid_headers_is_end_of_stream() {
    let mut req: &[u8] = b"GET / HTTP/1.1\r\nHost: example.com\r\n";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::EndOfStream)));
}

#[tokio::test]
async fn test_parse_empty_stream_is_end_of_stream() {
    let mut req: &[u8] = b"";
    let result = parse_request(&mut req).await;

    assert!(matches!(result, Err(ParseError::EndOfStream)));
}

#[tokio::test]
async fn test_read_line_sequence() {
    let mut input: &[u8] = b"first\r\n\r\nthird\r\n";

    assert_eq!(read_line(&mut input).await.unwrap(), (b"first".to_vec(), 7));
    assert_eq!(read_line(&mut input).await.unwrap(), (Vec::new(), 2));
    assert_eq!(read_line(&mut input).await.unwrap(), (b"third".to_vec(), 7));
    assert!(matches!(
        read_line(&mut input).await,
        Err(ParseError::EndOfStream)
    ));
}
