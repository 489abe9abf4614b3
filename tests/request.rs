use courier::{Context, Incoming, Method, Request};

#[test]
fn construct_from_context() {
    let cx = Incoming::new("GET", "/users");
    let request = Request::<()>::from_context(&cx);

    assert_eq!(request.uri, "/users");
    assert_eq!(request.method, Method::Get);
    assert!(request.route.is_none());
    assert!(request.params.is_empty());
}

#[test]
fn explicit_method_wins() {
    let cx = Incoming::new("NOTPATCH", "/documents");
    let request = Request::<()>::new(&cx, Some(Method::Patch), None);

    assert_ne!(request.method, "NOTPATCH");
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.uri, "/documents");
}

#[test]
fn explicit_uri_wins() {
    let cx = Incoming::new("POST", "/videos");
    let request = Request::<()>::new(&cx, None, Some("/images"));

    assert_ne!(request.uri, "/videos");
    assert_eq!(request.uri, "/images");
    assert_eq!(request.method, Method::Post);
}

#[test]
fn explicit_values_ignore_context() {
    let contexts = [
        Incoming::new("GET", "/"),
        Incoming::new("DELETE", "http://example.com/other?x=1"),
        Incoming::new("BREW", "*"),
    ];

    for cx in &contexts {
        let request = Request::<()>::new(cx, Some("OPTIONS".into()), Some("/fixed"));
        assert_eq!(request.method, Method::Options);
        assert_eq!(request.uri, "/fixed");
    }
}

#[test]
fn absolute_uri_from_context() {
    let cx = Incoming::new("GET", "http://google.com/search?q=foo");
    let request = Request::<()>::new(&cx, Some(Method::Get), None);

    assert_ne!(request.uri, "http://google.com/search?q=foo");
    assert_eq!(request.uri, "/search");
}

#[test]
fn absolute_uri_explicit() {
    let request = Request::<()>::new(
        &Incoming::default(),
        None,
        Some("https://example.com:8443/a/b?c=d#e"),
    );

    assert_eq!(request.uri, "/a/b");
}

#[test]
fn unknown_methods_are_kept() {
    let request = Request::<()>::from_context(&Incoming::new("PROPFIND", "/dav"));

    assert_eq!(request.method, Method::Custom("PROPFIND".into()));
    assert_eq!(request.method.as_str(), "PROPFIND");
    assert_eq!(request.method.to_string(), "PROPFIND");
}

#[test]
fn construct_from_http_request() {
    let req = http::Request::builder()
        .method(http::Method::PUT)
        .uri("http://localhost:8080/users/1?verbose=true")
        .body(())
        .unwrap();

    assert_eq!(Context::method(&req), Method::Put);

    let request = Request::<()>::from_context(&req);
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.uri, "/users/1");

    let (parts, _) = req.into_parts();
    let incoming = Incoming::from(&parts);
    assert_eq!(incoming.method, Method::Put);
    assert_eq!(incoming.target, "http://localhost:8080/users/1?verbose=true");

    let request = Request::<()>::from_context(&parts);
    assert_eq!(request.uri, "/users/1");
}

#[test]
fn http_extension_methods() {
    let req = http::Request::builder()
        .method("MKCOL")
        .uri("/collections/new")
        .body(())
        .unwrap();

    let request = Request::<()>::from_context(&req);
    assert_eq!(request.method, "MKCOL");
    assert_eq!(request.uri, "/collections/new");
}

#[test]
fn typed_params() {
    let mut request = Request::<()>::from_context(&Incoming::new("GET", "/posts/2021/hello"));
    request.params = vec!["2021", "hello"].into();

    assert_eq!(request.param::<u16>(0).unwrap(), 2021);
    assert_eq!(request.param::<String>(1).unwrap(), "hello");
    assert_eq!(request.params.get(1).unwrap(), "hello");

    assert!(matches!(
        request.param::<u16>(1),
        Err(courier::ParamError::Parse { index: 1, .. })
    ));
    assert!(matches!(
        request.param::<u16>(2),
        Err(courier::ParamError::NotFound { index: 2 })
    ));
}

#[test]
fn debug_shows_route_pattern() {
    let mut request = Request::<&str>::from_context(&Incoming::new("GET", "/"));
    request.route = Some(courier::route::value("/home", "home"));

    let debug = format!("{:?}", request);
    assert!(debug.contains("\"/home\""));
    assert!(debug.contains("\"/\""));
}
