/// Per-frame timing input for a title element.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameContext {
    /// Fraction of the element's on-screen duration, nominally in `[0, 1]`. Not validated.
    pub progress: f64,
    /// Seconds elapsed since the element started, when known.
    #[serde(default)]
    pub offset_time: Option<f64>,
}

impl FrameContext {
    /// Frame driven by progress only.
    pub fn at(progress: f64) -> Self {
        Self {
            progress,
            offset_time: None,
        }
    }

    /// Frame with an explicit elapsed time.
    pub fn with_offset(progress: f64, offset_time: f64) -> Self {
        Self {
            progress,
            offset_time: Some(offset_time),
        }
    }

    /// Elapsed time, falling back to progress when no offset was supplied.
    pub fn elapsed(&self) -> f64 {
        self.offset_time.unwrap_or(self.progress)
    }

    /// `count` frames with progress evenly spaced over `[0, 1]`.
    ///
    /// When `duration_secs` is set each frame also carries `offset_time = progress * duration`.
    pub fn sweep(count: usize, duration_secs: Option<f64>) -> Vec<Self> {
        let denom = count.saturating_sub(1).max(1) as f64;
        (0..count)
            .map(|i| {
                let progress = if count == 1 { 0.0 } else { i as f64 / denom };
                Self {
                    progress,
                    offset_time: duration_secs.map(|d| progress * d),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/frame.rs"]
mod tests;
