#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use sortvis_orchestrator_wasm::{abi_version, SortApp};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use serde_json::json;

wasm_bindgen_test_configure!(run_in_browser);

// Callback that pushes its argument onto `sink`.
fn collector(sink: &Array) -> Function {
    let f = Function::new_with_args("sink, x", "sink.push(x)");
    f.bind1(&JsValue::UNDEFINED, sink)
}

// JSON objects must arrive as plain JS objects, not Maps.
fn js(value: serde_json::Value) -> JsValue {
    value
        .serialize(&swb::Serializer::json_compatible())
        .unwrap()
}

fn app(config: serde_json::Value, frames: &Array, running: &Array) -> SortApp {
    let cfg = js(config);
    SortApp::new(cfg, collector(frames), collector(running)).expect("app builds")
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let frames = Array::new();
    let running = Array::new();
    let app = SortApp::new(JsValue::UNDEFINED, collector(&frames), collector(&running)).unwrap();
    assert_eq!(app.mode(), "basic");
    assert_eq!(app.status(), "Basic Sorting Algorithms | Data size: 15");
    assert_eq!(frames.length(), 1);
    assert_eq!(running.get(0).as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn sort_runs_to_completion() {
    let frames = Array::new();
    let running = Array::new();
    let mut app = app(json!({ "seed": 5, "initial_mode": "heap" }), &frames, &running);
    app.load_values(vec![4, 1, 3, 2]);
    app.start();
    assert_eq!(app.status(), "Running: Heap Sort");
    for _ in 0..200 {
        app.update(100.0).unwrap();
        if app.status() == "Sort complete!" {
            break;
        }
    }
    assert_eq!(app.values(), vec![1, 2, 3, 4]);
    let last = frames.get(frames.length() - 1);
    let layout = Reflect::get(&last, &JsValue::from_str("layout")).unwrap();
    assert_eq!(layout.as_string().as_deref(), Some("tree"));
}

#[wasm_bindgen_test]
fn dispatch_accepts_intent_objects() {
    let frames = Array::new();
    let running = Array::new();
    let mut app = app(json!({ "seed": 5 }), &frames, &running);
    let intent = js(json!({ "type": "switch_mode", "mode": "merge" }));
    app.dispatch(intent).unwrap();
    assert_eq!(app.mode(), "merge");
    assert_eq!(app.values().len(), 8);

    let bad = js(json!({ "type": "explode" }));
    assert!(app.dispatch(bad).is_err());
    assert!(app.dispatch(JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn unknown_algorithm_is_rejected() {
    let frames = Array::new();
    let running = Array::new();
    let mut app = app(json!({ "seed": 5 }), &frames, &running);
    assert!(app.change_algorithm("bogo".into()).is_err());
    assert!(app.change_algorithm("insertion".into()).is_ok());
    assert_eq!(app.status(), "Algorithm changed: Insertion Sort");
}

#[wasm_bindgen_test]
fn update_rejects_non_finite_dt() {
    let frames = Array::new();
    let running = Array::new();
    let mut app = app(json!({ "seed": 5 }), &frames, &running);
    assert!(app.update(f64::INFINITY).is_err());
    assert!(app.update(16.0).is_ok());
}
