#![cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use penguin_web::app::App;
use penguin_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn click(id: &str) {
    dom::document()
        .get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} exists"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

async fn settle() {
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn welcome_then_waddle_updates_distance() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;
    let doc = dom::document();
    assert!(doc.get_element_by_id("welcome-overlay").is_some());

    click("start-btn");
    settle().await;
    assert!(doc.get_element_by_id("welcome-overlay").is_none());

    click("collectButton");
    settle().await;
    let gems = doc.get_element_by_id("gems").expect("distance stat");
    assert_eq!(gems.text_content().unwrap_or_default(), "1");
}
