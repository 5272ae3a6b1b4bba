use rayon::prelude::*;

use crate::foundation::error::{TitleError, TitleResult};
use crate::layout::measure::TextMeasure;
use crate::model::frame::FrameContext;
use crate::motion::zoom::ZoomCurve;
use crate::render::layer::LayerPlan;
use crate::render::title::TitleRenderer;

/// Plan every frame in order on the calling thread.
pub fn render_frames<Z, M>(
    renderer: &TitleRenderer<Z>,
    frames: &[FrameContext],
    measure: &mut M,
) -> TitleResult<Vec<LayerPlan>>
where
    Z: ZoomCurve,
    M: TextMeasure + ?Sized,
{
    frames
        .iter()
        .map(|&f| renderer.plan_frame(f, &mut *measure))
        .collect()
}

/// Plan every frame on a dedicated rayon pool, one measurer per worker.
///
/// Output order matches `frames` and equals [`render_frames`] for deterministic measurers.
/// `threads = None` uses rayon's default worker count.
pub fn render_frames_parallel<Z, M, F>(
    renderer: &TitleRenderer<Z>,
    frames: &[FrameContext],
    make_measure: F,
    threads: Option<usize>,
) -> TitleResult<Vec<LayerPlan>>
where
    Z: ZoomCurve + Sync,
    M: TextMeasure,
    F: Fn() -> M + Sync + Send,
{
    let pool = build_thread_pool(threads)?;
    tracing::debug!(
        frames = frames.len(),
        threads = pool.current_num_threads(),
        "planning title frames in parallel"
    );

    pool.install(|| {
        frames
            .par_iter()
            .map_init(&make_measure, |measure, &f| renderer.plan_frame(f, measure))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> TitleResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(TitleError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| TitleError::layout(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
