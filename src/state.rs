use std::sync::Arc;

use crate::db::CourseStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CourseStore>,
}

impl AppState {
    pub fn new(store: impl CourseStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
