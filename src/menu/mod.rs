pub mod builder;
pub mod router;
pub mod tree;

pub use router::EventRouter;
pub use tree::{build_menu, LeafAction, MenuNode, MenuRoot};
