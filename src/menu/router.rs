use super::tree::{LeafAction, MenuRoot};
use std::collections::HashMap;

/// Resolves menu event ids to the action of the clicked leaf.
pub struct EventRouter {
    routes: HashMap<String, LeafAction>,
}

impl EventRouter {
    pub fn new<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = (String, LeafAction)>,
    {
        Self {
            routes: routes.into_iter().collect(),
        }
    }

    pub fn from_menu(root: &MenuRoot) -> Self {
        Self::new(
            root.leaves()
                .into_iter()
                .map(|(id, action)| (id.to_string(), action.clone())),
        )
    }

    pub fn route(&self, event_id: &str) -> Option<&LeafAction> {
        let action = self.routes.get(event_id);
        if action.is_none() {
            log::warn!("No route found for event: {}", event_id);
        }
        action
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
