// page/ - The document the scenes are layered over: element boxes, scroll, nav

mod layout;
mod nav;
mod scroll;

pub use layout::{
    content_id, section_id, ElementBox, PageConfig, PageLayout, Viewport, ABOUT, BODY, HERO, NAVIGATION,
};
pub use nav::{Anchor, Navigation};
pub use scroll::{ScrollState, SMOOTH_SCROLL_DURATION};
