//! UI Components
//!
//! The Leptos view layer: one component per section of the page.

mod hero;
mod item_modal;
mod lang_gate;
mod menu_browser;
mod menu_controls;
mod menu_grid;
mod site_footer;
mod top_bar;

pub use hero::Hero;
pub use item_modal::ItemModal;
pub use lang_gate::LanguageGate;
pub use menu_browser::MenuBrowser;
pub use menu_controls::MenuControls;
pub use menu_grid::MenuGrid;
pub use site_footer::SiteFooter;
pub use top_bar::TopBar;
