use trail_core::{CursorGlyph, PathCommand, TrailEngine};
use web_sys as web;

pub(crate) fn css_rgba(rgb: [f32; 3], alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (rgb[0] * 255.0).round() as u8,
        (rgb[1] * 255.0).round() as u8,
        (rgb[2] * 255.0).round() as u8,
        alpha
    )
}

/// Paint one frame: clear, stroke the neon curve, draw the cursor glyph.
/// Works in CSS pixel coordinates; the transform absorbs devicePixelRatio.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    engine: &TrailEngine,
) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    let w = canvas.width() as f64 / dpr;
    let h = canvas.height() as f64 / dpr;
    ctx.clear_rect(0.0, 0.0, w, h);

    let curve = engine.curve();
    if !curve.is_empty() && engine.is_visible() {
        let color = css_rgba(engine.config().neon_color, 1.0);
        trace(ctx, &curve);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.set_line_width(3.0);
        ctx.set_global_alpha(0.9);
        ctx.set_stroke_style_str(&color);
        ctx.set_shadow_color(&color);
        // layered shadow passes stand in for the stacked gaussian blur halo
        for blur in [8.0, 4.0, 2.0] {
            ctx.set_shadow_blur(blur);
            ctx.stroke();
        }
        ctx.set_shadow_blur(0.0);
        ctx.set_global_alpha(1.0);
    }

    if let Some(glyph) = engine.glyph() {
        draw_glyph(ctx, &glyph);
    }
}

fn trace(ctx: &web::CanvasRenderingContext2d, path: &[PathCommand]) {
    ctx.begin_path();
    for cmd in path {
        match *cmd {
            PathCommand::MoveTo(p) => ctx.move_to(p.x as f64, p.y as f64),
            PathCommand::LineTo(p) => ctx.line_to(p.x as f64, p.y as f64),
            PathCommand::CurveTo {
                control1,
                control2,
                to,
            } => ctx.bezier_curve_to(
                control1.x as f64,
                control1.y as f64,
                control2.x as f64,
                control2.y as f64,
                to.x as f64,
                to.y as f64,
            ),
        }
    }
}

fn draw_glyph(ctx: &web::CanvasRenderingContext2d, glyph: &CursorGlyph) {
    if glyph.opacity <= 0.0 {
        return;
    }
    ctx.set_global_alpha(f64::from(glyph.opacity));
    ctx.begin_path();
    let _ = ctx.arc(
        f64::from(glyph.position.x),
        f64::from(glyph.position.y),
        f64::from(glyph.size / 2.0),
        0.0,
        std::f64::consts::TAU,
    );
    ctx.set_shadow_blur(2.0);
    ctx.set_shadow_color("rgba(0, 0, 0, 0.5)");
    ctx.set_fill_style_str("#ffffff");
    ctx.fill();
    ctx.set_shadow_blur(0.0);
    ctx.set_global_alpha(1.0);
}
