use std::sync::Arc;

use crate::args::Args;

pub struct AppState<S> {
    pub args: Arc<Args>,
    pub service: Arc<S>,
}

impl<S> AppState<S> {
    pub fn new(args: Arc<Args>, service: S) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            args: Arc::clone(&self.args),
            service: Arc::clone(&self.service),
        }
    }
}
