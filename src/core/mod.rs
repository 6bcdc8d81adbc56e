mod clip;
mod entries;
mod path;

pub use clip::{clip, display_width};
pub use entries::{Entry, list_entries};
pub use path::{basename, extname, parent_dir};
