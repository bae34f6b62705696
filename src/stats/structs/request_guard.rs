use std::sync::Arc;
use std::time::Instant;
use crate::stats::structs::endpoint_stat::EndpointStat;
use crate::stats::structs::request_scope_stat::RequestScopeStat;

/// Scoped acquisition of the request lifecycle.
///
/// Created by `EndpointStat::begin_request()`. Completing the guard (or
/// dropping it) runs `after_invoke` with the measured elapsed time, so the
/// lifecycle pairing holds even when the surrounding layer unwinds early.
/// The guard must be completed or dropped on the thread that created it,
/// since the current-request binding it releases is per-thread.
pub struct RequestGuard {
    pub(crate) endpoint: Arc<EndpointStat>,
    pub(crate) scope: Arc<RequestScopeStat>,
    pub(crate) started: Instant,
    pub(crate) completed: bool,
}
