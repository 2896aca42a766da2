//! # Frame-Rate Counter
//!
//! Tracks recent frame times in a ring buffer and shows a compact FPS
//! overlay in a screen corner, the native stand-in for the original
//! demo's stats widget.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame timing statistics with a small imgui overlay.
pub struct FrameStats {
    /// Ring buffer of recent frame times, ~2 seconds at 60fps.
    frame_times: VecDeque<Duration>,
    max_samples: usize,
    frame_start: Option<Instant>,
    fps: f32,
    frame_time_ms: f32,
    last_update: Instant,
    update_interval: Duration,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
            frame_start: None,
            fps: 0.0,
            frame_time_ms: 0.0,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(100),
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record(start.elapsed());
            // Recompute ~10x per second rather than every frame.
            if self.last_update.elapsed() >= self.update_interval {
                self.update_metrics();
                self.last_update = Instant::now();
            }
        }
    }

    fn record(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    fn update_metrics(&mut self) {
        if self.frame_times.is_empty() {
            return;
        }
        let total: Duration = self.frame_times.iter().sum();
        let avg_ms = total.as_secs_f32() * 1000.0 / self.frame_times.len() as f32;
        self.frame_time_ms = avg_ms;
        self.fps = if avg_ms > 0.0 { 1000.0 / avg_ms } else { 0.0 };
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        self.frame_time_ms
    }

    /// Draws the FPS overlay in the top-right corner.
    pub fn render_overlay(&self, ui: &imgui::Ui) {
        let display_size = ui.io().display_size;

        ui.window("FPS")
            .size([110.0, 55.0], imgui::Condition::Always)
            .position([display_size[0] - 120.0, 10.0], imgui::Condition::Always)
            .no_decoration()
            .no_inputs()
            .bg_alpha(0.3)
            .build(|| {
                ui.text(format!("FPS: {:.0}", self.fps));
                ui.text(format!("{:.1}ms", self.frame_time_ms));
            });
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_average_recorded_frames() {
        let mut stats = FrameStats::new();
        for _ in 0..10 {
            stats.record(Duration::from_millis(20));
        }
        stats.update_metrics();

        assert!((stats.frame_time_ms() - 20.0).abs() < 0.5);
        assert!((stats.fps() - 50.0).abs() < 1.0);
    }

    #[test]
    fn ring_buffer_stays_bounded() {
        let mut stats = FrameStats::new();
        for _ in 0..500 {
            stats.record(Duration::from_millis(16));
        }
        assert_eq!(stats.frame_times.len(), stats.max_samples);
    }

    #[test]
    fn metrics_are_zero_before_any_frame() {
        let stats = FrameStats::new();
        assert_eq!(stats.fps(), 0.0);
        assert_eq!(stats.frame_time_ms(), 0.0);
    }
}
