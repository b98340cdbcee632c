use glam::Vec2;
use web_sys as web;

/// Map a client-space position into canvas backing-store pixels.
#[inline]
pub fn client_to_backing(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return client - rect_origin;
    }
    (client - rect_origin) / rect_size * backing
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_backing(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        canvas_size(canvas),
    )
}

/// Size the backing store to the CSS box times `devicePixelRatio` and return
/// the new size in canvas pixels.
pub fn fit_backing_store(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    canvas.set_width(((rect.width() * dpr) as u32).max(1));
    canvas.set_height(((rect.height() * dpr) as u32).max(1));
    canvas_size(canvas)
}

#[inline]
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32)
}
