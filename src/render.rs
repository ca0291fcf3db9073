//! Frame rendering
//!
//! Draws one frame from the game state in a fixed order: background, bullets,
//! ship, aliens, scoreboard, then the play button while no game is running.

use crate::game::AlienInvasion;
use crate::sprite::{draw_all, Art, Sprite};
use crate::ui::Scoreboard;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub fn render_frame(
    canvas: &mut Canvas<Window>,
    game: &AlienInvasion,
    art: &Art,
    scoreboard: &Scoreboard,
) -> Result<(), String> {
    canvas.set_draw_color(game.settings.bg_color());
    canvas.clear();

    draw_all(&game.world.bullets, canvas, art)?;
    game.world.ship.draw(canvas, art)?;
    draw_all(game.world.fleet.aliens(), canvas, art)?;

    scoreboard.render(canvas, &game.stats, art.ship)?;

    if !game.is_active() {
        game.play_button().render(canvas)?;
    }

    canvas.present();
    Ok(())
}
