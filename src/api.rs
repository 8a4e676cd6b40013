//! REST API Server for the Gullak assistant
//!
//! Exposes the chatbot, voice dispatch and translations via HTTP endpoints
//! for the web UI. Chat sessions live in memory, up to a fixed number; the
//! least recently used one is evicted when a new chat would exceed it.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::classifier::IntentClassifier;
use crate::config::AssistantConfig;
use crate::conversational::ChatSession;
use crate::error::AssistantError;
use crate::i18n::Translator;
use crate::models::{AccountSnapshot, Locale, PaymentMethod, Route};
use crate::pages::{dashboard, DashboardPage, LoginPage, PaymentPage, StaticPage, VoicePage};
use crate::voice::{Speaker, TracingSpeaker};

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub chat_id: Option<String>,
    pub message: String,
    #[serde(default)]
    pub authenticated: bool,
    pub locale: Option<String>,
    pub account: Option<AccountSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub page: String,
    pub transcript: String,
    pub locale: Option<String>,
    pub captcha_valid: Option<bool>,
    pub amount: Option<u64>,
    pub method: Option<PaymentMethod>,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

type Reply = (StatusCode, Json<ApiResponse>);

fn ok<T: Serialize>(data: T) -> Reply {
    (StatusCode::OK, Json(ApiResponse::success(data)))
}

fn fail(error: AssistantError) -> Reply {
    let status = match error {
        AssistantError::SessionNotFound(_) => StatusCode::NOT_FOUND,
        AssistantError::EmptyMessage
        | AssistantError::BadRequest(_)
        | AssistantError::InvalidLocale(_)
        | AssistantError::InvalidPage(_)
        | AssistantError::Payment(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(error.to_string())))
}

/// Unwrap a JSON body, answering malformed input inside the response wrapper
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Reply> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| fail(AssistantError::BadRequest(rejection.body_text())))
}

/// =============================
/// API State
/// =============================

pub const DEFAULT_MAX_SESSIONS: usize = 1000;

pub struct ChatEntry {
    pub session: Arc<Mutex<ChatSession>>,
    /// Position in the request sequence, for least-recently-used eviction
    last_used: u64,
}

#[derive(Clone)]
pub struct ApiState {
    pub config: AssistantConfig,
    pub speaker: Arc<dyn Speaker>,
    pub sessions: Arc<RwLock<HashMap<Uuid, ChatEntry>>>,
    pub max_sessions: usize,
}

impl ApiState {
    pub fn new(config: AssistantConfig, speaker: Arc<dyn Speaker>) -> Self {
        Self {
            config,
            speaker,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    pub fn with_max_sessions(mut self, max_sessions: usize) -> Self {
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Fetch or open the session for `chat_id`, evicting the least recently
    /// used session when the map is full
    async fn checkout(&self, chat_id: Uuid, locale: Locale) -> Arc<Mutex<ChatSession>> {
        let mut sessions = self.sessions.write().await;
        let tick = sessions.values().map(|e| e.last_used).max().unwrap_or(0) + 1;

        if !sessions.contains_key(&chat_id) && sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                warn!(
                    evicted = %oldest,
                    limit = self.max_sessions,
                    "Chat session limit reached, evicting least recently used"
                );
            }
        }

        let entry = sessions.entry(chat_id).or_insert_with(|| {
            info!(%chat_id, %locale, "Opening chat session");
            ChatEntry {
                session: Arc::new(Mutex::new(
                    ChatSession::new(self.speaker.clone())
                        .with_id(chat_id)
                        .with_thinking_delay(self.config.thinking_delay),
                )),
                last_used: tick,
            }
        });
        entry.last_used = tick;
        entry.session.clone()
    }

    fn locale_or_default(&self, tag: Option<&str>) -> Locale {
        tag.map(Locale::from_tag).unwrap_or(self.config.default_locale)
    }
}

/// =============================
/// Helpers: Chat Ids
/// =============================

fn stable_uuid_from_string(input: &str) -> Uuid {
    use sha2::{Digest, Sha256};

    let hash = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);

    // Set UUID version (4) and variant (RFC4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}

/// Parse a client chat id; free-form ids map to a stable UUID
fn parse_chat_id(value: &str) -> Uuid {
    Uuid::parse_str(value.trim()).unwrap_or_else(|_| stable_uuid_from_string(value.trim()))
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoints
/// =============================

async fn chat_handler(
    State(state): State<ApiState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Reply {
    let req = match body(payload) {
        Ok(req) => req,
        Err(reply) => return reply,
    };
    if req.message.trim().is_empty() {
        return fail(AssistantError::EmptyMessage);
    }

    let chat_id = match req.chat_id.as_deref() {
        Some(value) if !value.trim().is_empty() => parse_chat_id(value),
        _ => Uuid::new_v4(),
    };
    let locale = state.locale_or_default(req.locale.as_deref());

    let session = state.checkout(chat_id, locale).await;
    let mut session = session.lock().await;
    session.set_locale(locale);
    session.set_context(req.authenticated, req.account);

    let Some(reply) = session.send_message(&req.message).await else {
        return fail(AssistantError::EmptyMessage);
    };

    let messages: Vec<_> = session.log().messages().cloned().collect();
    info!(
        %chat_id,
        intent = ?reply.intent,
        messages = messages.len(),
        "Chat reply sent"
    );

    ok(serde_json::json!({
        "chat_id": chat_id,
        "intent": reply.intent,
        "answer": reply.text,
        "messages": messages,
    }))
}

async fn chat_history_handler(
    State(state): State<ApiState>,
    Path(chat_id): Path<String>,
) -> Reply {
    let id = parse_chat_id(&chat_id);

    let session = state
        .sessions
        .read()
        .await
        .get(&id)
        .map(|entry| entry.session.clone());
    let Some(session) = session else {
        warn!(%chat_id, "Unknown chat session");
        return fail(AssistantError::SessionNotFound(chat_id));
    };

    let session = session.lock().await;
    let messages: Vec<_> = session.log().messages().cloned().collect();

    ok(serde_json::json!({
        "chat_id": id,
        "locale": session.locale(),
        "authenticated": session.is_authenticated(),
        "messages": messages,
    }))
}

/// =============================
/// Voice Endpoint
/// =============================

async fn voice_handler(
    State(state): State<ApiState>,
    payload: Result<Json<VoiceRequest>, JsonRejection>,
) -> Reply {
    let req = match body(payload) {
        Ok(req) => req,
        Err(reply) => return reply,
    };
    let route: Route = match req.page.parse() {
        Ok(route) => route,
        Err(e) => return fail(e),
    };
    let tr = Translator::new(state.locale_or_default(req.locale.as_deref()));
    let command = IntentClassifier::classify_voice(&req.transcript);

    // Pages are rebuilt from the request; the client owns the form state
    let outcome = match route {
        Route::Login => {
            let mut page = LoginPage::new();
            page.set_captcha_valid(req.captcha_valid.unwrap_or(false));
            page.handle_voice_command(command, &req.transcript, &tr)
        }
        Route::Dashboard => {
            DashboardPage::default().handle_voice_command(command, &req.transcript, &tr)
        }
        Route::Payment => {
            let mut page = PaymentPage::new();
            if let Some(amount) = req.amount {
                page.set_amount(amount);
            }
            if let Some(method) = req.method {
                page.select_method(method);
            }
            page.handle_voice_command(command, &req.transcript, &tr)
        }
        Route::Register | Route::Settings => {
            StaticPage::new(route).handle_voice_command(command, &req.transcript, &tr)
        }
    };

    info!(
        page = %route,
        ?command,
        action = ?outcome.action,
        "Voice command handled"
    );

    ok(outcome)
}

/// =============================
/// Translation & Dashboard
/// =============================

async fn translate_handler(Path((locale, key)): Path<(String, String)>) -> Reply {
    let locale: Locale = match locale.parse() {
        Ok(locale) => locale,
        Err(e) => return fail(e),
    };
    let tr = Translator::new(locale);

    ok(serde_json::json!({
        "locale": locale,
        "key": key,
        "text": tr.t(&key),
        "fallback": !tr.has_own(&key),
    }))
}

async fn dashboard_handler(State(state): State<ApiState>) -> Reply {
    let tr = Translator::new(state.config.default_locale);
    let page = DashboardPage::default();

    ok(serde_json::json!({
        "summary": page.summary(),
        "total_savings_display": dashboard::format_currency(page.summary().total_savings),
        "goals": page.goal_views(&tr, dashboard::today()),
    }))
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/:chat_id", get(chat_history_handler))
        .route("/api/voice", post(voice_handler))
        .route("/api/translate/:locale/:key", get(translate_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    config: AssistantConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.port;
    let router = create_router(ApiState::new(config, Arc::new(TracingSpeaker)));

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::voice::RecordingSpeaker;

    fn state() -> ApiState {
        let config = AssistantConfig::default().without_delays();
        ApiState::new(config, Arc::new(RecordingSpeaker::new()))
    }

    fn router() -> Router {
        create_router(state())
    }

    fn chat(chat_id: &str, message: &str) -> Request<Body> {
        post_json("/api/chat", json!({"chat_id": chat_id, "message": message}))
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_stable_uuid_is_deterministic() {
        let a = stable_uuid_from_string("chat-42");
        assert_eq!(a, stable_uuid_from_string("chat-42"));
        assert_ne!(a, stable_uuid_from_string("chat-43"));
        assert_eq!(a.get_version_num(), 4);

        let real = Uuid::new_v4();
        assert_eq!(parse_chat_id(&real.to_string()), real);
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&router(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_chat_reply_and_history() {
        let router = router();

        let (status, body) = send(
            &router,
            post_json(
                "/api/chat",
                json!({
                    "chat_id": "session-1",
                    "message": "निवेश",
                    "authenticated": true,
                    "account": {"savings": 5000, "total_saved": 45000}
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["intent"], "INVESTMENT_ADVICE");
        assert!(body["data"]["answer"].as_str().unwrap().contains("5000"));
        assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 2);

        let (status, body) = send(&router, get_req("/api/chat/session-1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["authenticated"], true);
        assert_eq!(body["data"]["messages"][0]["text"], "निवेश");
        assert_eq!(body["data"]["messages"][1]["is_bot"], true);
    }

    #[tokio::test]
    async fn test_chat_visitor_fallback() {
        let (status, body) = send(
            &router(),
            post_json("/api/chat", json!({"message": "xyz gibberish"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["intent"], "GENERAL_RESPONSE");
        assert!(body["data"]["chat_id"].is_string());
    }

    #[tokio::test]
    async fn test_blank_chat_message_rejected() {
        let (status, body) =
            send(&router(), post_json("/api/chat", json!({"message": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_partial_account_reads_missing_values_as_zero() {
        let router = router();

        let (status, body) = send(
            &router,
            post_json(
                "/api/chat",
                json!({
                    "message": "how do I invest",
                    "authenticated": true,
                    "account": {"savings": 5000}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["answer"].as_str().unwrap().contains("5000"));

        let (status, body) = send(
            &router,
            post_json(
                "/api/chat",
                json!({
                    "message": "my goals",
                    "authenticated": true,
                    "account": {"goals": [{"name": "Bike"}, {"name": "Phone"}]}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["data"]["answer"].as_str().unwrap().contains("2 active goals"));
    }

    #[tokio::test]
    async fn test_malformed_body_uses_response_wrapper() {
        let router = router();

        let request = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&router, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Bad request"));

        let (status, body) =
            send(&router, post_json("/api/voice", json!({"page": "login"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_least_recently_used_session_is_evicted() {
        let router = create_router(state().with_max_sessions(2));

        send(&router, chat("first", "hello")).await;
        send(&router, chat("second", "hello")).await;
        send(&router, chat("first", "fees?")).await;
        send(&router, chat("third", "hello")).await;

        let (status, _) = send(&router, get_req("/api/chat/second")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&router, get_req("/api/chat/first")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["messages"].as_array().unwrap().len(), 4);

        let (status, _) = send(&router, get_req("/api/chat/third")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_chat_is_404() {
        let (status, _) = send(&router(), get_req("/api/chat/nobody")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_voice_on_payment_page() {
        let router = router();

        let (status, body) = send(
            &router,
            post_json(
                "/api/voice",
                json!({"page": "payment", "transcript": "Add 1000"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["command"], "ADD_MONEY");
        assert_eq!(body["data"]["action"], json!({"type": "set_amount", "amount": 1000}));

        let (_, body) = send(
            &router,
            post_json(
                "/api/voice",
                json!({"page": "/payment", "transcript": "add money", "amount": 1000, "method": "upi"}),
            ),
        )
        .await;
        assert_eq!(body["data"]["action"]["type"], "submit_payment");
    }

    #[tokio::test]
    async fn test_voice_login_needs_captcha() {
        let router = router();

        let (_, body) = send(
            &router,
            post_json("/api/voice", json!({"page": "login", "transcript": "login"})),
        )
        .await;
        assert_eq!(body["data"]["speech"], "Please enter the correct captcha first.");
        assert!(body["data"].get("action").is_none());

        let (_, body) = send(
            &router,
            post_json(
                "/api/voice",
                json!({"page": "login", "transcript": "login", "captcha_valid": true}),
            ),
        )
        .await;
        assert_eq!(body["data"]["action"]["type"], "login");
    }

    #[tokio::test]
    async fn test_voice_invalid_page() {
        let (status, body) = send(
            &router(),
            post_json("/api/voice", json!({"page": "admin", "transcript": "help"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("admin"));
    }

    #[tokio::test]
    async fn test_translate() {
        let router = router();

        let (status, body) = send(&router, get_req("/api/translate/es/common.welcome")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["text"], "Bienvenido a Gullak");
        assert_eq!(body["data"]["fallback"], false);

        let (_, body) = send(&router, get_req("/api/translate/de/chatbot.feeInfo")).await;
        assert_eq!(body["data"]["fallback"], true);

        let (status, _) = send(&router, get_req("/api/translate/fr/common.welcome")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = send(&router(), get_req("/api/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["summary"]["total_savings"], 15750);
        assert_eq!(body["data"]["total_savings_display"], "₹15,750");
        assert_eq!(body["data"]["goals"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"]["goals"][0]["name"], "Emergency Fund");
    }
}
