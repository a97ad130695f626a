use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::http::header::AUTHORIZATION;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use chrono::Utc;
use serde_json::{json, Map, Value};

pub const ADMIN_PASSWORD: &str = "letmein";
pub const ISSUED_TOKEN: &str = "test-token";

/// Collections addressed as `/{collection}/{key}`.
const COLLECTIONS: [&str; 4] = ["skills", "projects", "coding-profiles", "contacts"];
/// Single-record resources addressed as `/{name}`.
const SINGLETONS: [&str; 2] = ["portfolio", "about"];

#[derive(Default)]
struct BackendState {
    collections: HashMap<String, Vec<Value>>,
    singletons: HashMap<String, Value>,
    next_id: u64,
    /// `METHOD /path` of every request, in arrival order.
    requests: Vec<String>,
    /// Answer successful writes with a message only, no `data`.
    bare_writes: bool,
}

fn now() -> Value {
    Value::String(Utc::now().to_rfc3339())
}

impl BackendState {
    fn assign_id(&mut self, collection: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", collection, self.next_id)
    }

    fn insert(&mut self, collection: &str, body: Value) -> Value {
        let mut record = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let id = self.assign_id(collection);
        record.entry("_id").or_insert(Value::String(id));
        record.entry("createdAt").or_insert_with(now);
        if collection == "contacts" {
            record.entry("status").or_insert(json!("new"));
        }

        let record = Value::Object(record);
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record.clone());
        record
    }

    fn list(&self, collection: &str) -> Vec<Value> {
        self.collections.get(collection).cloned().unwrap_or_default()
    }

    fn position(&self, collection: &str, key: &str) -> Option<usize> {
        let field = if collection == "coding-profiles" {
            "platform"
        } else {
            "_id"
        };
        self.collections
            .get(collection)?
            .iter()
            .position(|r| r[field] == key)
    }

    fn update(&mut self, collection: &str, key: &str, body: Value) -> Option<Value> {
        let index = self.position(collection, key)?;
        let record = self.collections.get_mut(collection)?.get_mut(index)?;
        merge(record, body);
        Some(record.clone())
    }

    fn remove(&mut self, collection: &str, key: &str) -> Option<Value> {
        let index = self.position(collection, key)?;
        Some(self.collections.get_mut(collection)?.remove(index))
    }

    fn put_singleton(&mut self, name: &str, body: Value) -> Value {
        let id = format!("{}-1", name);
        let record = self
            .singletons
            .entry(name.to_string())
            .or_insert_with(|| json!({ "_id": id, "createdAt": now() }));
        merge(record, body);
        record.clone()
    }
}

fn merge(record: &mut Value, patch: Value) {
    if let (Value::Object(target), Value::Object(fields)) = (record, patch) {
        for (k, v) in fields {
            target.insert(k, v);
        }
        target.insert("updatedAt".to_string(), now());
    }
}

fn ok(data: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "success": true, "data": data }))
}

fn created(data: Value) -> HttpResponse {
    HttpResponse::Created().json(json!({ "success": true, "data": data }))
}

fn fail(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "success": false, "message": message }))
}

fn written(status: StatusCode, record: Value, bare: bool) -> HttpResponse {
    if bare {
        HttpResponse::build(status).json(json!({ "success": true, "message": "Saved" }))
    } else {
        HttpResponse::build(status).json(json!({ "success": true, "data": record }))
    }
}

fn found(record: Option<Value>) -> HttpResponse {
    match record {
        Some(r) => ok(r),
        None => fail(StatusCode::NOT_FOUND, "Record not found"),
    }
}

async fn dispatch(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<Mutex<BackendState>>,
) -> HttpResponse {
    let path = req.path().trim_start_matches("/api").to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let method = req.method().as_str().to_string();
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let authorized = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        == Some(ISSUED_TOKEN);

    let mut state = state.lock().unwrap();
    state.requests.push(format!("{} {}", method, path));
    let bare = state.bare_writes;

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["auth", "quick-login"]) => {
            if body["password"] == ADMIN_PASSWORD {
                ok(json!({ "token": ISSUED_TOKEN }))
            } else {
                fail(StatusCode::UNAUTHORIZED, "Invalid password")
            }
        }
        ("POST", ["auth", "verify-token"]) if authorized => ok(json!({ "valid": true })),
        ("POST", ["auth", "verify-token"]) => fail(StatusCode::UNAUTHORIZED, "Invalid token"),

        // Visitors may leave a message without a token.
        ("POST", ["contacts"]) => created(state.insert("contacts", body)),
        ("GET", ["contacts", ..]) if !authorized => fail(StatusCode::UNAUTHORIZED, "Not authorized"),
        (m, _) if m != "GET" && !authorized => fail(StatusCode::UNAUTHORIZED, "Not authorized"),

        ("GET", [name]) if SINGLETONS.contains(name) => {
            found(state.singletons.get(*name).cloned())
        }
        ("POST" | "PUT", [name]) if SINGLETONS.contains(name) => {
            written(StatusCode::OK, state.put_singleton(name, body), bare)
        }

        ("GET", ["projects", "featured"]) => ok(Value::Array(
            state
                .list("projects")
                .into_iter()
                .filter(|p| p["featured"] == true)
                .collect(),
        )),
        ("GET", [c]) if COLLECTIONS.contains(c) => ok(Value::Array(state.list(c))),
        ("GET", [c, key]) if COLLECTIONS.contains(c) => {
            let record = state.position(c, key).map(|i| state.list(c)[i].clone());
            found(record)
        }
        ("POST", [c]) if COLLECTIONS.contains(c) => {
            written(StatusCode::CREATED, state.insert(c, body), bare)
        }
        ("PUT", [c, key]) if COLLECTIONS.contains(c) => match state.update(c, key, body) {
            Some(record) => written(StatusCode::OK, record, bare),
            None => fail(StatusCode::NOT_FOUND, "Record not found"),
        },
        ("DELETE", [c, key]) if COLLECTIONS.contains(c) => match state.remove(c, key) {
            Some(_) => ok(json!({ "message": "Deleted" })),
            None => fail(StatusCode::NOT_FOUND, "Record not found"),
        },

        _ => fail(StatusCode::NOT_FOUND, "Route not found"),
    }
}

/// In-process portfolio API: JSON records kept in memory, writes guarded by
/// the bearer token that a quick login with [`ADMIN_PASSWORD`] issues.
#[derive(Clone)]
pub struct FakeBackend {
    base_url: String,
    state: Arc<Mutex<BackendState>>,
}

impl FakeBackend {
    /// Binds an ephemeral port and serves until the test's runtime stops.
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(BackendState::default()));
        let shared = web::Data::from(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
        let port = listener.local_addr().expect("fake backend address").port();

        let server = HttpServer::new(move || {
            App::new()
                .app_data(shared.clone())
                .default_service(web::to(dispatch))
        })
        .workers(1)
        .disable_signals()
        .listen(listener)
        .expect("listen on fake backend socket")
        .run();
        actix_web::rt::spawn(server);

        Self {
            base_url: format!("http://127.0.0.1:{}/api", port),
            state,
        }
    }

    /// Successful writes reply `{"success":true,"message":..}` from now on.
    pub fn reply_to_writes_without_data(&self) {
        self.state.lock().unwrap().bare_writes = true;
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    /// Stores a record as if created earlier; returns it with its `_id`.
    pub fn seed(&self, collection: &str, record: Value) -> Value {
        self.state.lock().unwrap().insert(collection, record)
    }

    pub fn seed_singleton(&self, name: &str, record: Value) -> Value {
        self.state.lock().unwrap().put_singleton(name, record)
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.state.lock().unwrap().list(collection)
    }

    pub fn singleton(&self, name: &str) -> Option<Value> {
        self.state.lock().unwrap().singletons.get(name).cloned()
    }

    /// Requests that were not reads.
    pub fn writes(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| !r.starts_with("GET "))
            .cloned()
            .collect()
    }
}
