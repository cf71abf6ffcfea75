pub mod popup;
pub mod scrollbar;

pub use popup::centered_popup;
pub use scrollbar::render_vertical_scrollbar;
