use crate::paint::css_rgba;
use trail_core::GlowStyle;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Thin fixed bar at the top of the page whose glow tracks the flicker
/// driver. Absent element means the page opted out; callers skip it.
pub struct NeonBar {
    element: web::HtmlElement,
    color: [f32; 3],
}

impl NeonBar {
    pub fn locate(document: &web::Document, color: [f32; 3]) -> Option<Self> {
        let element = document
            .get_element_by_id("neon-bar")?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self { element, color })
    }

    pub fn apply(&self, glow: GlowStyle) {
        let style = self.element.style();
        let _ = style.set_property("background-color", &css_rgba(self.color, glow.core_alpha));
        let shadow = format!(
            "0 0 {}px {}, 0 0 {}px {}, 0 0 {}px {}, 0 2px {}px {}",
            glow.halo_radius_px[0],
            css_rgba(self.color, glow.halo_alpha[0]),
            glow.halo_radius_px[1],
            css_rgba(self.color, glow.halo_alpha[1]),
            glow.halo_radius_px[2],
            css_rgba(self.color, glow.halo_alpha[2]),
            glow.halo_radius_px[1],
            css_rgba(self.color, glow.halo_alpha[1]),
        );
        let _ = style.set_property("box-shadow", &shadow);
    }
}
