pub const SERVICE_NAME: &str = "Serverless Lab with PostgreSQL";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub service: &'static str,
}

/// Reports whether the service started with a database. No live ping is made.
#[derive(Clone, Copy, Debug)]
pub struct HealthService {
    connected: bool,
}

impl HealthService {
    #[must_use]
    pub const fn new(connected: bool) -> Self {
        Self { connected }
    }

    #[must_use]
    pub const fn report(&self) -> HealthReport {
        HealthReport {
            status: "healthy",
            database: if self.connected { "connected" } else { "disconnected" },
            service: SERVICE_NAME,
        }
    }
}
