use shortener_engine::{Endpoint, EndpointError};

#[test]
fn joins_without_doubling_slashes() {
    let bare = Endpoint::parse("https://api.example.com").unwrap();
    let slashed = Endpoint::parse("https://api.example.com/").unwrap();

    assert_eq!(bare.create_url().as_str(), "https://api.example.com/create-url");
    assert_eq!(slashed.create_url().as_str(), "https://api.example.com/create-url");
    assert_eq!(bare, slashed);
    assert_eq!(bare.to_string(), "https://api.example.com");
}

#[test]
fn keeps_path_prefix() {
    let endpoint = Endpoint::parse(" https://gw.example.com/prod/v1/ ").unwrap();

    assert_eq!(
        endpoint.create_url().as_str(),
        "https://gw.example.com/prod/v1/create-url"
    );
    assert_eq!(
        endpoint.redirect_url("abc123").as_str(),
        "https://gw.example.com/prod/v1/redirect-url/abc123"
    );
}

#[test]
fn redirect_url_encodes_short_url_as_one_segment() {
    let endpoint = Endpoint::parse("http://localhost:8080").unwrap();

    assert_eq!(
        endpoint.redirect_url("abc123").as_str(),
        "http://localhost:8080/redirect-url/abc123"
    );
    assert_eq!(
        endpoint.redirect_url("a/b c").as_str(),
        "http://localhost:8080/redirect-url/a%2Fb%20c"
    );
}

#[test]
fn rejects_bad_endpoints() {
    assert_eq!(Endpoint::parse("  "), Err(EndpointError::Empty));
    assert!(matches!(
        Endpoint::parse("api.example.com"),
        Err(EndpointError::Invalid(_))
    ));
    assert_eq!(
        Endpoint::parse("ftp://files.example.com"),
        Err(EndpointError::UnsupportedScheme("ftp".to_string()))
    );
    assert_eq!(
        Endpoint::parse("https://api.example.com/?key=1"),
        Err(EndpointError::HasQueryOrFragment)
    );
    assert_eq!(
        Endpoint::parse("https://api.example.com/#top"),
        Err(EndpointError::HasQueryOrFragment)
    );
}
