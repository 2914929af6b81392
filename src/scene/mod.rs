//! JSON widget tree documents and their conversion into widgets.

pub mod build;
pub mod model;

pub use build::{build_root, build_widget, root_from_json, root_from_path};
pub use model::{RootDef, WidgetDef};
