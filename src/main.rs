use log::{error, info};
use sdl2::image::LoadTexture;
use std::path::Path;

mod alien;
mod bullet;
mod clock;
mod collision;
mod fleet;
mod game;
mod gui;
mod input_system;
mod render;
mod settings;
mod ship;
mod sprite;
mod stats;
mod text;
mod ui;

use clock::{FrameLimiter, SystemClock};
use game::{AlienInvasion, LoopControl};
use input_system::poll_actions;
use render::render_frame;
use settings::{Settings, SETTINGS_PATH};
use sprite::{Art, SpriteSizes};
use ui::Scoreboard;

const WINDOW_TITLE: &str = "Alien Invasion";
const SHIP_IMAGE: &str = "images/ship.bmp";
const ALIEN_IMAGE: &str = "images/alien.bmp";

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a sdl2::render::TextureCreator<sdl2::video::WindowContext>,
    path: &str,
) -> Result<sdl2::render::Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let settings = Settings::load_or_default(SETTINGS_PATH)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, settings.screen_width, settings.screen_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    let mouse = sdl_context.mouse();

    let ship_texture = load_texture(&texture_creator, SHIP_IMAGE)?;
    let alien_texture = if Path::new(ALIEN_IMAGE).exists() {
        Some(load_texture(&texture_creator, ALIEN_IMAGE)?)
    } else {
        info!("{} not found, drawing aliens as rectangles", ALIEN_IMAGE);
        None
    };

    let ship_query = ship_texture.query();
    let alien_size = match &alien_texture {
        Some(texture) => {
            let query = texture.query();
            (query.width, query.height)
        }
        None => (settings.alien_width, settings.alien_height),
    };
    let sizes = SpriteSizes {
        ship: (ship_query.width, ship_query.height),
        alien: alien_size,
    };

    let art = Art {
        ship: &ship_texture,
        alien: alien_texture.as_ref(),
        bullet_color: settings.bullet_color(),
        alien_color: settings.alien_color(),
    };

    let mut limiter = FrameLimiter::new(settings.frame_rate);
    let mut game = AlienInvasion::new(settings, sizes);
    let scoreboard = Scoreboard::new(game.world.screen());
    let mut clock = SystemClock;
    let mut cursor_visible = game.cursor_visible();
    mouse.show_cursor(cursor_visible);

    info!(
        "Window {}x{} at {} fps, fleet of {}",
        game.settings.screen_width,
        game.settings.screen_height,
        game.settings.frame_rate,
        game.world.fleet.len()
    );

    loop {
        for action in poll_actions(&mut event_pump) {
            if game.handle_action(action) == LoopControl::Quit {
                info!("Quit requested, final score {}", game.stats.score);
                std::process::exit(0);
            }
        }

        game.step(&mut clock);

        if game.cursor_visible() != cursor_visible {
            cursor_visible = game.cursor_visible();
            mouse.show_cursor(cursor_visible);
        }

        render_frame(&mut canvas, &game, &art, &scoreboard)?;
        limiter.tick(&mut clock);
    }
}
