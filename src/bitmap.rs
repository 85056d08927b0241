//! Rendering pixels as rows of colored cells.

use crate::color::Color;
use crate::format::colorize;
use crate::nearest::find_nearest;
use crate::palette::BLACK;
use rgb::{RGB, RGB8};

#[derive(Debug, Clone)]
pub struct Bitmap {
    size: u32,
    glyph: String,
    foreground: Color,
}

pub struct Builder {
    size: u32,
    glyph: String,
    foreground: Color,
}

impl Bitmap {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// One output line per input row, each pixel replaced by the glyph drawn
    /// on its nearest palette color.
    pub fn render_rows<I, R>(&self, rows: I) -> Vec<String>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = RGB8>,
    {
        rows.into_iter()
            .map(|row| row.into_iter().map(|px| self.cell(px)).collect())
            .collect()
    }

    /// Shrinks `image` to fit `size` x `size`, keeping the aspect ratio, then
    /// renders it. Images already within bounds keep their dimensions.
    #[cfg(feature = "image")]
    pub fn render_image(&self, image: &image::DynamicImage) -> Vec<String> {
        let thumbnail = if image.width() > self.size || image.height() > self.size {
            image.thumbnail(self.size, self.size).to_rgb8()
        } else {
            image.to_rgb8()
        };

        log::debug!(
            "rendering {}x{} thumbnail",
            thumbnail.width(),
            thumbnail.height()
        );

        self.render_rows(thumbnail.rows().map(|row| {
            row.map(|px| {
                let [r, g, b] = px.0;

                RGB8::new(r, g, b)
            })
        }))
    }

    fn cell(&self, px: RGB8) -> String {
        let probe = RGB::new(i32::from(px.r), i32::from(px.g), i32::from(px.b));

        colorize(self.foreground, Some(find_nearest(probe)), &self.glyph)
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Upper bound for both dimensions of rendered images.
    pub fn size(&mut self, size: u32) -> &mut Self {
        self.size = size.max(1);

        self
    }

    pub fn glyph(&mut self, glyph: impl Into<String>) -> &mut Self {
        self.glyph = glyph.into();

        self
    }

    pub fn foreground(&mut self, color: Color) -> &mut Self {
        self.foreground = color;

        self
    }

    pub fn build(&self) -> Bitmap {
        Bitmap {
            size: self.size,
            glyph: self.glyph.clone(),
            foreground: self.foreground,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            size: 20,
            glyph: " ".to_owned(),
            foreground: BLACK,
        }
    }
}
