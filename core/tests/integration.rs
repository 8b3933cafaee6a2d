//! End-to-end login against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `RemoteLoginLoader`
//! over real HTTP through `UreqHttpClient`, with and without the
//! authenticator decorator. Validates that the body-bearing GET, the headers
//! and the response mapping all line up with an actual server.

use std::net::SocketAddr;
use std::sync::mpsc;
use std::time::Duration;

use login_core::{
    AuthenticatorDecorator, ClientConfig, Credentials, LoginError, LoginResult, RemoteLoginLoader,
    UreqHttpClient,
};
use mock_server::AppState;

/// Start the mock server on a background thread and return its address.
fn start_server(state: AppState) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_state(listener, state).await
        })
        .unwrap();
    });

    addr
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig::for_base_url(&format!("http://{addr}")).unwrap()
}

/// Run `execute` and wait for its single completion.
fn login<C: login_core::HttpClient>(
    loader: &RemoteLoginLoader<C>,
    credentials: &Credentials,
) -> LoginResult {
    let (tx, rx) = mpsc::channel();
    loader.execute(credentials, move |result| tx.send(result).unwrap());
    let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();
    assert!(
        rx.recv_timeout(Duration::from_millis(100)).is_err(),
        "completion must run once"
    );
    result
}

#[test]
fn login_lifecycle() {
    let addr = start_server(AppState::seeded());
    let loader = RemoteLoginLoader::with_config(UreqHttpClient::new(), config_for(addr));

    // Step 1: standard account.
    let user = login(&loader, &Credentials::new("a username", "a password")).unwrap();
    assert!(!user.is_premium);
    assert!(!user.token.is_empty());

    // Step 2: premium account.
    let user = login(&loader, &Credentials::new("premium user", "premium password")).unwrap();
    assert!(user.is_premium);

    // Step 3: wrong password is a 401, which the mapper rejects.
    let err = login(&loader, &Credentials::new("a username", "wrong")).unwrap_err();
    assert_eq!(err, LoginError::InvalidData);
}

#[test]
fn decorated_transport_sends_bearer_token() {
    let state = AppState::seeded();
    let addr = start_server(state.clone());
    let client = AuthenticatorDecorator::new(UreqHttpClient::new(), "app-key");
    let loader = RemoteLoginLoader::with_config(client, config_for(addr));

    let user = login(&loader, &Credentials::new("a username", "a password")).unwrap();

    assert!(!user.is_premium);
    assert_eq!(state.last_authorization().as_deref(), Some("Bearer app-key"));
}

#[test]
fn undecorated_transport_sends_no_authorization() {
    let state = AppState::seeded();
    let addr = start_server(state.clone());
    let loader = RemoteLoginLoader::with_config(UreqHttpClient::new(), config_for(addr));

    login(&loader, &Credentials::new("a username", "a password")).unwrap();

    assert!(state.last_authorization().is_none());
}

#[test]
fn unreachable_server_is_connectivity() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let loader = RemoteLoginLoader::with_config(UreqHttpClient::new(), config_for(addr));

    let err = login(&loader, &Credentials::new("a username", "a password")).unwrap_err();
    assert_eq!(err, LoginError::Connectivity);
}

#[test]
fn unknown_route_is_invalid_data() {
    let addr = start_server(AppState::seeded());
    // Pointing at the right host with a path the server does not serve.
    let request = login_core::RequestDescriptor::new(
        &config_for(addr),
        login_core::HttpMethod::Get,
        "/missing",
    )
    .build();

    let response = UreqHttpClient::new().execute(&request).unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(
        login_core::mapper::map_response(&response),
        Err(LoginError::InvalidData)
    );
}

#[tokio::test]
async fn load_resolves_over_real_http() {
    let addr = start_server(AppState::seeded());
    let loader = RemoteLoginLoader::with_config(UreqHttpClient::new(), config_for(addr));

    let user = loader
        .load(&Credentials::new("premium user", "premium password"))
        .await
        .unwrap();
    assert!(user.is_premium);
}
