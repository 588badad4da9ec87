pub mod runner;

pub use runner::{SimRunner, Status};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the runner, or return `None` before `tycho_init`.
fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Build the simulation from a JSON configuration (empty for the default
/// preset). Throws a JS `Error` if the configuration is invalid.
#[wasm_bindgen]
pub fn tycho_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = SimRunner::from_json(config_json).map_err(|e| {
        log::error!("tycho: {e}");
        JsValue::from(js_sys::Error::new(&e.to_string()))
    })?;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("tycho: initialized");
    Ok(())
}

/// Advance and redraw one frame. Returns `false` once the user has quit.
#[wasm_bindgen]
pub fn tycho_tick(dt: f64) -> bool {
    with_runner(|r| r.tick(dt)).unwrap_or(false)
}

/// `code` is the DOM `KeyboardEvent.code`.
#[wasm_bindgen]
pub fn tycho_key_down(code: &str) {
    with_runner(|r| r.key_down(code));
}

#[wasm_bindgen]
pub fn tycho_key_up(code: &str) {
    with_runner(|r| r.key_up(code));
}

#[wasm_bindgen]
pub fn tycho_blur() {
    with_runner(|r| r.blur());
}

#[wasm_bindgen]
pub fn tycho_wheel(delta_y: f64) {
    with_runner(|r| r.wheel(delta_y));
}

#[wasm_bindgen]
pub fn tycho_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn tycho_is_running() -> bool {
    with_runner(|r| r.is_running()).unwrap_or(false)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_runner(|r| r.vector_vertices_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_runner(|r| r.vector_vertex_count()).unwrap_or(0)
}

/// Text labels for this frame as a JSON array.
#[wasm_bindgen]
pub fn get_labels_json() -> String {
    with_runner(|r| to_json(r.labels())).unwrap_or_else(|| "[]".to_string())
}

#[wasm_bindgen]
pub fn get_status_json() -> String {
    with_runner(|r| to_json(&r.status())).unwrap_or_else(|| "null".to_string())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("tycho: serialization failed: {e}");
        "null".to_string()
    })
}
