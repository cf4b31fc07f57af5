// Pure helpers that turn scene state into CSS and pointer coordinates.
// Kept free of web-sys so they can be tested on the host.

/// Pointer position inside an element, in NDC (-1..1, y up).
#[inline]
pub fn pointer_ndc(x_css: f32, y_css: f32, width_css: f32, height_css: f32) -> [f32; 2] {
    if width_css > 0.0 && height_css > 0.0 {
        let u = (x_css / width_css).clamp(0.0, 1.0);
        let v = (y_css / height_css).clamp(0.0, 1.0);
        [u * 2.0 - 1.0, 1.0 - v * 2.0]
    } else {
        [0.0, 0.0]
    }
}

#[inline]
pub fn no_button_transform(offset_x_px: f32, offset_y_px: f32) -> String {
    format!("translate({:.1}px, {:.1}px)", offset_x_px, offset_y_px)
}

#[inline]
pub fn yes_button_transform(growth: f32) -> String {
    format!("scale({:.2})", growth)
}

/// Inner HTML of the letter card.
pub fn letter_html(heading: &str, opening: &str, body: &str, reasons: &[&str], sign_off: &str) -> String {
    let items: String = reasons
        .iter()
        .map(|r| format!("<li>{}</li>", r))
        .collect();
    format!(
        "<h2>{}</h2><p>{}</p><p>{}</p><ul>{}</ul><p class='sign-off'>{}</p>",
        heading, opening, body, items, sign_off
    )
}
