use courier::{Config, Incoming, Request};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.max_forwards, Config::DEFAULT_MAX_FORWARDS);
    assert_eq!(Config::new(), config);

    let request = Request::<()>::from_context(&Incoming::default());
    assert_eq!(request.config(), &config);
}

#[test]
fn deserialize() {
    let config: Config = serde_json::from_str(r#"{ "max_forwards": 3 }"#).unwrap();
    assert_eq!(config.max_forwards, 3);

    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config, Config::default());

    assert!(serde_json::from_str::<Config>(r#"{ "max_forward": 3 }"#).is_err());
}

#[test]
fn attach_to_request() {
    let request =
        Request::<()>::from_context(&Incoming::default()).with_config(Config::new().max_forwards(0));

    assert_eq!(request.config().max_forwards, 0);
}
