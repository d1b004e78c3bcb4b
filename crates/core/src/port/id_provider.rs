// ID Provider Port (for deterministic testing)

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique invocation ID (log correlation)
    fn generate_id(&self) -> String;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Sequential provider for tests (`inv-1`, `inv-2`, ...)
pub struct SequentialIdProvider {
    next: std::sync::atomic::AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self {
            next: std::sync::atomic::AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> String {
        let id = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        format!("inv-{}", id)
    }
}
