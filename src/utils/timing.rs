//! Cooperative delays. The auth flows deliberately hold the UI for a fixed
//! interval (success-message display, simulated reset email), so the sleep
//! must suspend only the calling handler, never the page.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
