use std::sync::OnceLock;

/// ReqRes demo API. Overridable at deploy time via `env.js` globals.
pub const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let obj = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if obj.is_undefined() || obj.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(obj);
    js_sys::Reflect::get(&obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__LEARNHUB_ENV = { API_BASE_URL: "..." } (env.js) takes
    // precedence over window.__LEARNHUB_CONFIG = { api_base_url: "..." }.
    read_global_key("__LEARNHUB_ENV", "API_BASE_URL")
        .or_else(|| read_global_key("__LEARNHUB_CONFIG", "api_base_url"))
}

/// Resolves and caches the API base URL. Safe to call more than once; the
/// first resolution wins.
pub fn init() {
    let base = snapshot_from_globals().unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(base);
}

pub fn api_base_url() -> String {
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
