use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

// ---------------------------------------------------------------------------
// Figure – scoped plotting surface
// ---------------------------------------------------------------------------

/// Handle for one output image: target path plus pixel geometry.
///
/// [`Figure::render`] scopes the drawing surface: the bitmap backend exists
/// only for the duration of the call, the closure draws on a white canvas,
/// and the surface is flushed to disk before the backend is released. No
/// chart can touch another chart's surface.
pub struct Figure {
    path: PathBuf,
    width: u32,
    height: u32,
}

impl Figure {
    /// A figure of `size_in` inches rasterized at [`DPI`](super::DPI).
    pub fn new(path: impl Into<PathBuf>, size_in: (f64, f64)) -> Self {
        Figure {
            path: path.into(),
            width: super::inches(size_in.0),
            height: super::inches(size_in.1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the surface, hand it to `draw`, then flush the PNG.
    pub fn render<'s, F>(&'s self, draw: F) -> Result<()>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'s>, Shift>) -> Result<()>,
    {
        let root = BitMapBackend::new(&self.path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).context("filling figure background")?;

        draw(&root)?;

        root.present()
            .with_context(|| format!("writing {}", self.path.display()))?;
        log::info!("wrote {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_writes_a_png_of_the_requested_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.png");

        let figure = Figure::new(&path, (2.0, 1.0));
        figure.render(|_root| Ok(())).unwrap();

        assert_eq!(image::image_dimensions(&path).unwrap(), (600, 300));
    }
}
