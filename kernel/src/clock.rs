use time::OffsetDateTime;

/// Source of the current instant; injected so lending arithmetic can run against fixed times.
pub trait Clock: 'static + Sync + Send {
    fn now(&self) -> OffsetDateTime;
}
