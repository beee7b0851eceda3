use super::*;

#[test]
fn decode_body_reads_catalog_array() {
    let courses: Vec<Course> = decode_body(CATALOG_URL, r#"[{"id":"css","title":"CSS"}]"#).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, "css");
}

#[test]
fn decode_body_reports_url_on_failure() {
    let err = decode_body::<Vec<Course>>(CATALOG_URL, "<html>").unwrap_err();
    match err {
        ApiError::Decode { url, .. } => assert_eq!(url, "/courses.json"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn status_error_formats_url_and_code() {
    let err = ApiError::Status { url: CATALOG_URL.to_owned(), status: 404 };
    assert_eq!(err.to_string(), "request to /courses.json returned status 404");
}

#[test]
fn transport_error_keeps_message() {
    let err = transport_error(CLIENT_CONFIG_URL, "offline");
    assert_eq!(err.to_string(), "request to /api/client-config failed: offline");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetches_are_unavailable_off_browser() {
    let result = block_on_ready(fetch_courses());
    assert_eq!(result, Err(ApiError::Unavailable));
}

// Minimal executor for futures that complete without awaiting I/O.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
