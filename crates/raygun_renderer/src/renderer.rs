//! Scanline render scheduler.
//!
//! A fixed pool of worker threads pulls rows off a shared queue. Each worker
//! owns a [`Tracer`] and writes only the row it took, so the scene is read
//! without locks and the only contended state is the queue itself.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, info};
use raygun_core::Scene;
use raygun_math::{Color, Ray};
use thiserror::Error;

use crate::{PixelBuffer, RayStats, Tracer};

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;

/// How a render is executed. What is rendered lives in the scene's
/// [`RenderSettings`](raygun_core::RenderSettings).
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Number of worker threads, `None` for one per available core
    pub workers: Option<usize>,
}

impl RenderOptions {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Resolved number of worker threads.
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub image: PixelBuffer,
    pub stats: RayStats,
    pub elapsed: Duration,
}

/// Render every row of the scene's render slice.
///
/// Rows outside the slice are left black.
pub fn render(scene: &Scene, options: &RenderOptions) -> RenderResult<RenderOutput> {
    let workers = options.worker_count();
    if workers == 0 {
        return Err(RenderError::NoWorkers);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("raygun-worker-{}", i))
        .build()?;

    let settings = scene.settings();
    let slice = settings.render_slice();
    let mut image = PixelBuffer::new(settings.width, settings.height);

    info!(
        "Rendering {}x{} (lines {} to {}) on {} workers, {}x{} oversampling",
        settings.width,
        settings.height,
        slice.start,
        slice.end,
        workers,
        settings.oversampling,
        settings.oversampling
    );

    let start = Instant::now();
    let rows = image
        .rows_mut()
        .enumerate()
        .skip(slice.start as usize)
        .take(slice.len());
    let queue = Mutex::new(rows);
    let stats = Mutex::new(RayStats::default());

    pool.scope(|s| {
        for _ in 0..workers {
            s.spawn(|_| {
                let mut tracer = Tracer::new(scene);
                loop {
                    let next = queue.lock().unwrap_or_else(PoisonError::into_inner).next();
                    let Some((y, row)) = next else {
                        break;
                    };
                    for (x, pixel) in row.iter_mut().enumerate() {
                        *pixel = render_pixel(&mut tracer, x as u32, y as u32).to_rgb();
                    }
                    if y % 100 == 0 {
                        debug!("Line {} done", y);
                    }
                }
                stats
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .merge(tracer.stats());
            });
        }
    });
    drop(queue);

    let elapsed = start.elapsed();
    let stats = stats.into_inner().unwrap_or_else(PoisonError::into_inner);
    info!(
        "Time {:.2?} for {} objects ({} rays, {} shadow rays)",
        elapsed,
        scene.object_count(),
        stats.rays,
        stats.shadow_rays
    );

    Ok(RenderOutput {
        image,
        stats,
        elapsed,
    })
}

/// Average color of the `oversampling`² primary rays through pixel (x, y).
pub fn render_pixel(tracer: &mut Tracer<'_>, x: u32, y: u32) -> Color {
    let scene = tracer.scene();
    let os = u64::from(scene.settings().oversampling);
    let (x, y) = (u64::from(x), u64::from(y));
    let origin = scene.camera().position;
    let plane = scene.image_plane();

    let mut color = Color::BLACK;
    for i in 0..os {
        for j in 0..os {
            let direction = plane.direction((x * os + i) as f64, (y * os + j) as f64);
            color += tracer.trace(&Ray::new(origin, direction), 1);
        }
    }
    color / scene.settings().samples_per_pixel() as f64
}
