use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion};
use desktop_pet::pet::{BehaviorEngine, HostWindow, PetEvent, ScreenGeometry, WindowBounds};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct NullHost;

impl HostWindow for NullHost {
    fn screen_geometry(&self) -> Result<ScreenGeometry> {
        Ok(ScreenGeometry {
            width: 2560,
            height: 1400,
        })
    }

    fn window_position(&self) -> Result<(i32, i32)> {
        Ok((1200, 1315))
    }

    fn set_window_position(&mut self, _x: i32, _y: i32) {}

    fn set_window_size(&mut self, _width: u32, _height: u32) {}

    fn window_bounds(&self) -> Result<WindowBounds> {
        Ok(WindowBounds::default())
    }

    fn close(&mut self) {}
}

fn bench_step(c: &mut Criterion) {
    let mut engine =
        BehaviorEngine::start_with_rng(NullHost, StdRng::seed_from_u64(7), 0).unwrap();
    let mut now = 0u64;
    c.bench_function("engine_step_60hz", |b| {
        b.iter(|| {
            now += 16;
            engine.step(now);
            let mode = engine.mode();
            if mode.is_idle() {
                engine.handle_event(PetEvent::AnimationCycleComplete { mode }, now);
            }
        })
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
