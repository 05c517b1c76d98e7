//! Headless spritemark: the full benchmark pipeline with no window.
//!
//! Demonstrates:
//!   1. Building a SimConfig and World
//!   2. Uploading a two-frame sprite atlas to the software backend
//!   3. Driving frames with FrameRunner at a fixed 16 ms cadence
//!   4. Translating raw inputs through the binding table mid-run
//!   5. Reading fps, phase timings, and framebuffer statistics
//!
//! Run with:
//!   cargo run --example headless_run

use spritemark_core::{Action, Bindings, Color, Command, CommandBatch, InputCode, Key};
use spritemark_render::{FrameRunner, HeadlessBackend, RenderBackend};
use spritemark_sim::{SimConfig, World};

const FRAME_MS: u64 = 16;
const FRAMES: u64 = 600;

/// A horizontal strip atlas: frame 0 teal, frame 1 orange.
fn atlas_pixels(config: &SimConfig) -> Vec<u8> {
    let colors = [Color::rgb(0, 140, 140), Color::rgb(230, 140, 0)];
    let strip_w = (config.sprite_w * config.frame_count) as usize;
    let mut pixels = Vec::with_capacity(strip_w * config.sprite_h as usize * 4);
    for _y in 0..config.sprite_h as usize {
        for x in 0..strip_w {
            let c = colors[(x / config.sprite_w as usize) % colors.len()];
            pixels.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
    }
    pixels
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== spritemark headless ===\n");

    // 1. Reference configuration: 480x272, 100 sprites, seed 2026.
    let config = SimConfig::default();
    let mut world = World::new(config.clone())?;
    println!(
        "World: {}x{}, {} sprites active, capacity {}, seed {}",
        config.screen_w,
        config.screen_h,
        world.active_count(),
        config.capacity,
        world.seed()
    );

    // 2. Software backend and the sprite atlas.
    let mut backend = HeadlessBackend::new();
    backend.create_surface(config.screen_w, config.screen_h)?;
    let atlas = backend.upload_texture(
        config.sprite_w * config.frame_count,
        config.sprite_h,
        &atlas_pixels(&config),
    )?;
    let mut runner = FrameRunner::new(atlas);

    // 3. Raw inputs arrive as key codes; the binding table turns them
    //    into commands. This run presses Right twice and Down once.
    let bindings = Bindings::reference(config.population_step);
    let scripted: &[(u64, Key)] = &[(120, Key::Right), (240, Key::Right), (360, Key::Down)];

    // 4. Drive frames at a fixed cadence.
    for frame in 0..FRAMES {
        let now_ms = frame * FRAME_MS;

        let mut batch = CommandBatch::new();
        for &(at, key) in scripted {
            if at == frame {
                if let Some(Action::Command(cmd)) = bindings.lookup(InputCode::Key(key)) {
                    batch.push(cmd);
                }
            }
        }

        let metrics = runner.run_frame(&mut world, &mut backend, now_ms, batch)?;

        if frame % 100 == 0 {
            println!(
                "  frame {frame:>3}: t={now_ms:>5}ms fps={:>3} sprites={:>4} \
                 frame={:>4}us (tick={}us sprites={}us overlay={}us)",
                world.fps(),
                world.active_count(),
                metrics.total_us,
                metrics.step.tick_us,
                metrics.sprites_us,
                metrics.overlay_us,
            );
        }
    }

    // 5. One more command injected directly, bypassing the bindings.
    let metrics = runner.run_frame(
        &mut world,
        &mut backend,
        FRAMES * FRAME_MS,
        [Command::AdjustPopulation(-150)],
    )?;
    println!(
        "\nAfter AdjustPopulation(-150): {} sprites, overlay refreshed: {}",
        world.active_count(),
        metrics.overlay_refreshed
    );

    // 6. Framebuffer statistics from the software target.
    let total = (backend.width() * backend.height()) as usize;
    let background = backend.pixel_count(Color::WHITE);
    println!("Frames presented: {}", backend.frames_presented());
    println!("Rotated quads: {}", backend.rotated_quads());
    println!(
        "Final framebuffer: {}/{} background pixels, {} sprite/overlay pixels",
        background,
        total,
        total - background
    );

    println!("Done.");
    Ok(())
}
