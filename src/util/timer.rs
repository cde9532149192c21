//! Async delay that works in the browser and degrades to a no-op elsewhere.

use std::time::Duration;

/// Wait for `duration` on the browser event loop.
///
/// Outside `hydrate` there is no event loop to yield to, so this resolves
/// immediately.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
