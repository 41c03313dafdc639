fn main() {
    // The binary only does anything in the browser; trunk builds it for
    // wasm32 and the host build is a no-op.
    #[cfg(target_arch = "wasm32")]
    learnhub_frontend::start();
}
