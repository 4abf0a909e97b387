use gpui::prelude::*;
use gpui::*;
use gpui_frame_stats::{FramePhase, FrameStatConfig, FrameStatView, FrameStats};
use rand::Rng;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

struct DemoApp {
    stats: FrameStats,
    started: Instant,
    panel: Entity<FrameStatView>,
}

impl DemoApp {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let config = FrameStatConfig::default();
        let stats = FrameStats::new(config.history_capacity);

        let panel = cx.new(|cx| {
            let mut view = FrameStatView::new("frame", config, cx);
            if let Err(err) = view.setup(&stats) {
                eprintln!("{err:#}");
            }
            view
        });

        cx.spawn(async move |this, cx| loop {
            cx.background_executor().timer(FRAME).await;
            let alive = this.update(cx, |app, cx| {
                app.record_frame();
                app.panel.update(cx, |_, cx| cx.notify());
            });
            if alive.is_err() {
                break;
            }
        })
        .detach();

        Self {
            stats,
            started: Instant::now(),
            panel,
        }
    }

    /// Fakes one frame worth of phase timings (ms).
    fn record_frame(&mut self) {
        let mut rng = rand::rng();
        let t = self.started.elapsed().as_secs_f64();
        let spike = if rng.random_range(0.0..1.0) < 0.03 { 12.0 } else { 0.0 };
        let timings = [
            (FramePhase::Input, rng.random_range(0.2..0.8)),
            (FramePhase::Network, rng.random_range(0.0..2.0)),
            (FramePhase::Physics, 2.0 + (t * 0.7).sin().abs() * 3.0),
            (FramePhase::Animation, rng.random_range(0.5..1.5)),
            (FramePhase::Render, 6.0 + rng.random_range(0.0..2.0) + spike),
            (FramePhase::Swap, 0.5),
        ];
        let busy: f64 = timings.iter().map(|(_, ms)| ms).sum();
        let idle = (16.6 - busy).max(0.0);

        let mut frame = timings.to_vec();
        frame.push((FramePhase::Idle, idle));
        self.stats.record_frame(t, &frame);
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .bg(gpui::black())
            .child(self.panel.clone())
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        // p: toggle percent, end: follow the live edge
        gpui_frame_stats::init(cx);

        cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| DemoApp::new(cx))
        })
        .expect("failed to open window");
    });
}
