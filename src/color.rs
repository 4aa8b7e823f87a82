use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Histogram bar colours
// ---------------------------------------------------------------------------

/// Hue at the cheapest bin (blue) and at the most expensive one (red).
const HUE_LOW: f32 = 220.0;
const HUE_HIGH: f32 = 0.0;

/// `n` colours sweeping from blue to red, one per histogram bin.
pub fn price_gradient(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let hue = HUE_LOW + (HUE_HIGH - HUE_LOW) * t;
            let hsl = Hsl::new(hue, 0.70, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
