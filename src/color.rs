use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Poster palette
// ---------------------------------------------------------------------------

/// The fixed chart palette of the poster (Office-theme accent colors).
pub const POSTER_PALETTE: [RGBColor; 6] = [
    RGBColor(0x4f, 0x81, 0xbd), // blue
    RGBColor(0xc0, 0x50, 0x4d), // red
    RGBColor(0x9b, 0xbb, 0x59), // green
    RGBColor(0x80, 0x64, 0xa2), // purple
    RGBColor(0x4b, 0xac, 0xc6), // teal
    RGBColor(0xf7, 0x96, 0x46), // orange
];

/// Dark blue used for the title and axis text of the type chart.
pub const TEXT_PRIMARY: RGBColor = RGBColor(0x1f, 0x49, 0x7d);

// ---------------------------------------------------------------------------
// Color generation
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colours for `n` chart series: the poster palette, extended with
/// generated hues when a chart needs more series than the palette has.
pub fn series_colors(n: usize) -> Vec<RGBColor> {
    if n <= POSTER_PALETTE.len() {
        return POSTER_PALETTE[..n].to_vec();
    }
    let mut colors = POSTER_PALETTE.to_vec();
    colors.extend(generate_palette(n - POSTER_PALETTE.len()));
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_palette_is_sized_and_distinct() {
        assert!(generate_palette(0).is_empty());

        let colors = generate_palette(8);
        assert_eq!(colors.len(), 8);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn series_colors_prefers_the_poster_palette() {
        assert_eq!(series_colors(2), POSTER_PALETTE[..2].to_vec());
        assert_eq!(series_colors(6), POSTER_PALETTE.to_vec());

        let extended = series_colors(9);
        assert_eq!(extended.len(), 9);
        assert_eq!(extended[..6], POSTER_PALETTE);
    }
}
