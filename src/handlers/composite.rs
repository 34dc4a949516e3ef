use std::sync::Arc;
use async_trait::async_trait;

use crate::models::burn::BurnReport;
use crate::traits::event_handler::BurnEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn BurnEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn BurnEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BurnEventHandler for CompositeEventHandler {
    async fn handle_burn(&self, report: &BurnReport) {
        for handler in &self.handlers {
            handler.handle_burn(report).await;
        }
    }

    async fn handle_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Tagged {
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl BurnEventHandler for Tagged {
        async fn handle_burn(&self, report: &BurnReport) {
            self.log.lock().unwrap().push(format!("{}:{}", self.tag, report.burned_amount));
        }

        async fn handle_error(&self, _error: &anyhow::Error) {
            self.log.lock().unwrap().push(format!("{}:error", self.tag));
        }
    }

    #[tokio::test]
    async fn fans_out_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeEventHandler::new();
        assert!(composite.is_empty());

        composite.add_handler(Arc::new(Tagged { tag: "a", log: log.clone() }));
        composite.add_handler(Arc::new(Tagged { tag: "b", log: log.clone() }));
        assert_eq!(composite.len(), 2);

        let report = BurnReport::new("7".to_string(), 100.0, 7.0);
        composite.handle_burn(&report).await;
        composite.handle_error(&anyhow::anyhow!("boom")).await;

        assert_eq!(*log.lock().unwrap(), vec!["a:7", "b:7", "a:error", "b:error"]);
    }
}
