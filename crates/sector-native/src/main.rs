use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use glam::{Quat, Vec3};
use sector_core::{
    AnimationSettings, ChildId, Interpolation, LayoutConfig, ReferencePoints,
    DEFAULT_FRAME_COUNT, DEFAULT_FRAME_INTERVAL,
};
use sector_layout::{Scene, SectorDriver};

// Demo pacing
const TICK: Duration = Duration::from_millis(16); // ~60 ticks per second
const DEFAULT_ITEMS: usize = 5;
const DEFAULT_TICKS: u64 = 240;
const END_SWEEP_RAD_PER_TICK: f32 = 0.01; // end marker orbit speed around the center
const CHURN_EVERY: u64 = 60; // add or remove an item this often

struct DemoSettings {
    items: usize,
    ticks: u64,
    animation: AnimationSettings,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}={raw:?}")),
        Err(_) => Ok(default),
    }
}

fn read_settings() -> anyhow::Result<DemoSettings> {
    let slerp: bool = env_or("SECTOR_SLERP", false)?;
    Ok(DemoSettings {
        items: env_or("SECTOR_ITEMS", DEFAULT_ITEMS)?,
        ticks: env_or("SECTOR_TICKS", DEFAULT_TICKS)?,
        animation: AnimationSettings {
            enabled: true,
            frame_count: env_or("SECTOR_FRAMES", DEFAULT_FRAME_COUNT)?,
            frame_interval: env_or("SECTOR_INTERVAL", DEFAULT_FRAME_INTERVAL)?,
            interpolation: if slerp {
                Interpolation::Spherical
            } else {
                Interpolation::Linear
            },
        },
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = read_settings()?;

    let mut scene = Scene::new();
    let center = scene.add("center", Vec3::ZERO);
    let start = scene.add("start", Vec3::new(2.0, 0.0, 0.0));
    let end = scene.add("end", Vec3::new(0.0, 2.0, 0.0));
    let mut items: Vec<ChildId> = (0..settings.items)
        .map(|i| scene.add(format!("item-{i}"), Vec3::ZERO))
        .collect();

    let config = LayoutConfig {
        animation: settings.animation,
        debug: log::log_enabled!(log::Level::Debug),
        ..LayoutConfig::default()
    };
    let mut driver = SectorDriver::new(config, ReferencePoints::new(center, start, end));
    let committed = driver.engine_mut().subscribe();

    log::info!(
        "sector-native: items={} ticks={} frames={} interval={} interpolation={:?}",
        settings.items,
        settings.ticks,
        settings.animation.frame_count,
        settings.animation.frame_interval,
        settings.animation.interpolation
    );

    let started = Instant::now();
    let end_home = scene.pose(end).context("end marker missing")?.position;
    for tick in 1..=settings.ticks {
        let frame_start = Instant::now();

        let sweep = Quat::from_rotation_z(tick as f32 * END_SWEEP_RAD_PER_TICK);
        scene.set_position(end, sweep * end_home);

        if tick % CHURN_EVERY == 0 {
            if tick % (CHURN_EVERY * 2) == 0 {
                if let Some(id) = items.pop() {
                    scene.remove(id);
                    log::info!("[tick {tick}] removed {:?}", id);
                }
            } else {
                let id = scene.add(format!("item-{}", items.len()), Vec3::ZERO);
                items.push(id);
                log::info!("[tick {tick}] added {:?}", id);
            }
        }

        let report = driver.frame(&mut scene);
        if let Some(Err(e)) = report.layout {
            log::warn!("[tick {tick}] layout skipped: {e}");
        }
        let settled = std::iter::from_fn(|| committed.try_recv().ok()).count();
        if settled > 0 {
            log::debug!("[tick {tick}] {settled} children settled");
        }

        if let Some(rest) = TICK.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    for node in scene.iter() {
        let p = node.pose.position;
        log::info!("{:>8} ({:.3},{:.3},{:.3})", node.name, p.x, p.y, p.z);
    }
    log::info!(
        "ran {} frames in {:.2}s",
        driver.frames(),
        started.elapsed().as_secs_f32()
    );
    Ok(())
}
