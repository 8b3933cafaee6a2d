use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;
use uuid::Uuid;

pub const LOGIN_PATH: &str = "/path";

#[derive(Clone, Debug)]
pub struct Account {
    pub password: String,
    pub premium: bool,
}

#[derive(Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginReply {
    pub premium: bool,
    pub token: String,
}

#[derive(Clone, Default)]
pub struct AppState {
    users: Arc<HashMap<String, Account>>,
    last_authorization: Arc<Mutex<Option<String>>>,
}

impl AppState {
    pub fn with_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = (S, Account)>,
        S: Into<String>,
    {
        Self {
            users: Arc::new(users.into_iter().map(|(name, acc)| (name.into(), acc)).collect()),
            last_authorization: Arc::default(),
        }
    }

    /// Two accounts: `a username`/`a password` (standard) and
    /// `premium user`/`premium password` (premium).
    pub fn seeded() -> Self {
        Self::with_users([
            (
                "a username",
                Account {
                    password: "a password".to_string(),
                    premium: false,
                },
            ),
            (
                "premium user",
                Account {
                    password: "premium password".to_string(),
                    premium: true,
                },
            ),
        ])
    }

    /// The `Authorization` header of the most recent login request, if any.
    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

pub fn app() -> Router {
    app_with_state(AppState::seeded())
}

pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route(LOGIN_PATH, get(login))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_state(listener, AppState::seeded()).await
}

pub async fn run_with_state(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_state(state)).await
}

async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginReply>, StatusCode> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    *state
        .last_authorization
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = authorization;

    let account = state
        .users
        .get(&body.username)
        .filter(|account| account.password == body.password)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    info!(username = %body.username, premium = account.premium, "login accepted");
    Ok(Json(LoginReply {
        premium: account.premium,
        token: Uuid::new_v4().to_string(),
    }))
}
