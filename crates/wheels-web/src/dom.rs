use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current `location.search`, or an empty string.
pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Look up the drawing canvas by element id.
pub fn find_canvas(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("getContext: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!("2d context: {:?}", e))
}
