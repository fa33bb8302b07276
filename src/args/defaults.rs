use super::types::PositiveUsize;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("pummel/", env!("CARGO_PKG_VERSION"));

pub(super) fn default_workers() -> PositiveUsize {
    std::thread::available_parallelism()
        .map_or(PositiveUsize::MIN, PositiveUsize::from)
}
