use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Request throughput per endpoint plus the domain events worth watching:
// orders placed and association churn. Everything is registered with a
// single registry scraped via /metrics.
//
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    /// Requests handled, by endpoint name
    pub requests_total: IntCounterVec,

    // Domain metrics
    pub orders_placed: IntCounter,
    pub products_attached: IntCounter,
    pub products_detached: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("requests_total", "Total requests handled"),
            &["endpoint"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let orders_placed = IntCounter::new("orders_placed_total", "Total orders placed")?;
        registry.register(Box::new(orders_placed.clone()))?;

        let products_attached = IntCounter::new(
            "order_products_attached_total",
            "Total products attached to orders",
        )?;
        registry.register(Box::new(products_attached.clone()))?;

        let products_detached = IntCounter::new(
            "order_products_detached_total",
            "Total products detached from orders",
        )?;
        registry.register(Box::new(products_detached.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            orders_placed,
            products_attached,
            products_detached,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
