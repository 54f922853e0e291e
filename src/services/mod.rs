// PassVault services
// Services provide the strength core: the local heuristic scorer and the remote strength cache.

pub mod heuristic_scorer;
pub mod strength_cache;
