//! XML navigation helpers over roxmltree documents.

mod utils;

pub use utils::{find_child, find_descendant, get_tag_name, get_text, has_tag, raw_text};
