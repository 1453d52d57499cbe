// props/ - Literal film-set props
//
// Hero props come back already placed. About icons come back as builders so
// the same icon can be placed more than once.

mod about;
mod hero;

pub use about::{about_icons, camera_icon, film_strip, mini_clapper, play_button, timeline_bar};
pub use hero::{clapperboard, director_chair, film_camera, film_reel, microphone, spotlight};

use crate::scene::Entity;

/// Hero props in registration order
pub fn hero_props() -> Vec<Entity> {
    vec![
        film_camera(),
        clapperboard(),
        film_reel(),
        spotlight(),
        microphone(),
        director_chair(),
    ]
}
