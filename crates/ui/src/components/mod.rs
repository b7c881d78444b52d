mod footer;
mod header;
mod landing;
mod sidebar;
mod study;

pub use footer::Footer;
pub use header::Header;
pub use landing::LandingView;
pub use sidebar::Sidebar;
pub use study::{render_transcript, transcript_lines};
