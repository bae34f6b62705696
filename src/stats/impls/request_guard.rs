use std::error::Error;
use std::sync::Arc;
use crate::stats::structs::endpoint_stat::EndpointStat;
use crate::stats::structs::request_guard::RequestGuard;
use crate::stats::structs::request_scope_stat::RequestScopeStat;

impl RequestGuard {
    pub fn endpoint(&self) -> &Arc<EndpointStat>
    {
        &self.endpoint
    }

    pub fn scope(&self) -> &Arc<RequestScopeStat>
    {
        &self.scope
    }

    /// Elapsed time since the request started, in nanoseconds.
    pub fn elapsed_nanos(&self) -> u64
    {
        self.started.elapsed().as_nanos().min(u128::from(u64::MAX)) as u64
    }

    /// Completes the request now, reporting `error` and the measured
    /// elapsed time.
    pub fn complete(mut self, error: Option<&dyn Error>)
    {
        let nanos = self.elapsed_nanos();
        self.completed = true;
        self.endpoint.after_invoke(error, nanos);
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self)
    {
        if !self.completed {
            let nanos = self.elapsed_nanos();
            self.endpoint.after_invoke(None, nanos);
        }
    }
}
