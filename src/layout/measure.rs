use std::collections::HashMap;

use crate::foundation::error::{TitleError, TitleResult};
use crate::model::title::FontSpec;

/// Measures the height of an unstroked text block.
///
/// Implementations may cache; the result for a given input must not change between calls.
pub trait TextMeasure {
    /// Height in pixels of `text` laid out with `font` and wrapped at `width` pixels.
    fn measure_text_height(&mut self, text: &str, font: &FontSpec, width: f64)
    -> TitleResult<f64>;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn measure_text_height(
        &mut self,
        text: &str,
        font: &FontSpec,
        width: f64,
    ) -> TitleResult<f64> {
        (**self).measure_text_height(text, font, width)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    family: String,
    size_bits: u64,
    width_bits: u64,
}

/// Memo table for measured heights keyed by `(text, family, size, width)`.
#[derive(Debug, Default)]
pub struct MeasureCache {
    heights: HashMap<MeasureKey, f64>,
    hits: u64,
    misses: u64,
}

impl MeasureCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached height or compute and store it.
    pub fn get_or_measure(
        &mut self,
        text: &str,
        font: &FontSpec,
        width: f64,
        measure: impl FnOnce() -> TitleResult<f64>,
    ) -> TitleResult<f64> {
        let key = MeasureKey {
            text: text.to_owned(),
            family: font.family.clone(),
            size_bits: font.size.to_bits(),
            width_bits: width.to_bits(),
        };
        if let Some(&h) = self.heights.get(&key) {
            self.hits += 1;
            return Ok(h);
        }

        tracing::debug!(text_len = text.len(), family = %font.family, "measure cache miss");
        let h = measure()?;
        self.misses += 1;
        self.heights.insert(key, h);
        Ok(h)
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of lookups that had to measure.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Return `true` when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

/// Parley-backed measurement using fonts registered from raw bytes.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: Vec<String>,
    cache: MeasureCache,
}

impl Default for ParleyMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParleyMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasure")
            .field("families", &self.families)
            .field("cache", &self.cache)
            .finish()
    }
}

impl ParleyMeasure {
    /// Construct a measurer with fresh Parley contexts and no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: Vec::new(),
            cache: MeasureCache::new(),
        }
    }

    /// Register a font file and return its primary family name.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> TitleResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| TitleError::layout("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TitleError::layout("registered font family has no name"))?
            .to_string();
        self.families.push(family_name.clone());
        Ok(family_name)
    }

    /// Family names registered so far, in registration order.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// Cache statistics for this measurer.
    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    /// Return `true` when any entry of the family list was registered with this measurer.
    pub fn has_family(&self, family_list: &str) -> bool {
        family_list
            .split(',')
            .map(|f| f.trim().trim_matches(['"', '\'']))
            .any(|f| self.families.iter().any(|r| r.eq_ignore_ascii_case(f)))
    }

    fn layout_height(&mut self, text: &str, font: &FontSpec, width: f64) -> TitleResult<f64> {
        let size_px = font.size as f32;
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TitleError::layout("font size must be finite and > 0"));
        }
        // No system fonts are loaded, so an unknown family would shape to nothing.
        if !self.has_family(&font.family) {
            return Err(TitleError::layout(format!(
                "font family \"{}\" is not registered",
                font.family
            )));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        let max_width = (width.is_finite() && width > 0.0).then_some(width as f32);
        layout.break_all_lines(max_width);

        let height = f64::from(layout.height());
        if height <= 0.0 && !text.trim().is_empty() {
            return Err(TitleError::layout(format!(
                "text laid out to zero height with family \"{}\"",
                font.family
            )));
        }
        Ok(height)
    }
}

impl TextMeasure for ParleyMeasure {
    fn measure_text_height(
        &mut self,
        text: &str,
        font: &FontSpec,
        width: f64,
    ) -> TitleResult<f64> {
        // Split borrow: the cache and the parley contexts live side by side.
        let mut cache = std::mem::take(&mut self.cache);
        let out = cache.get_or_measure(text, font, width, || self.layout_height(text, font, width));
        self.cache = cache;
        out
    }
}

/// Font-free estimate: fixed average glyph advance and line height, greedy word wrapping.
///
/// Deterministic and cheap; used for headless planning and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedLineHeight {
    /// Average glyph advance as a fraction of the font size.
    pub advance_em: f64,
    /// Line height as a fraction of the font size.
    pub line_height_em: f64,
}

impl Default for FixedLineHeight {
    fn default() -> Self {
        Self {
            advance_em: 0.5,
            line_height_em: 1.16,
        }
    }
}

impl FixedLineHeight {
    /// Number of wrapped lines `text` occupies at `width`.
    pub fn line_count(&self, text: &str, font: &FontSpec, width: f64) -> usize {
        let advance = font.size * self.advance_em;
        let max_cols = if advance > 0.0 && width.is_finite() && width > 0.0 {
            ((width / advance).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut lines = 0usize;
        for paragraph in text.split('\n') {
            let mut cols = 0usize;
            lines += 1;
            for word in paragraph.split_whitespace() {
                let len = word.chars().count();
                let needed = if cols == 0 { len } else { cols + 1 + len };
                if cols > 0 && needed > max_cols {
                    lines += 1;
                    cols = len;
                } else {
                    cols = needed;
                }
                // Words longer than a line break mid-word.
                while cols > max_cols {
                    lines += 1;
                    cols -= max_cols;
                }
            }
        }
        lines
    }
}

impl TextMeasure for FixedLineHeight {
    fn measure_text_height(
        &mut self,
        text: &str,
        font: &FontSpec,
        width: f64,
    ) -> TitleResult<f64> {
        let lines = self.line_count(text, font, width);
        Ok(lines as f64 * font.size * self.line_height_em)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
