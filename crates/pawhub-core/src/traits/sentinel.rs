//! Viewport-visibility seam.

use async_trait::async_trait;

/// The signal that drives further page fetches.
///
/// In a rendering environment this wraps the off-screen marker element
/// whose entry into the viewport asks for more items. The feed only ever
/// depends on this trait, so tests substitute a deterministic double that
/// fires "became visible" on demand, and a CLI can wire it to a prompt.
#[async_trait]
pub trait Sentinel: Send {
    /// Resolves the next time the sentinel enters the viewport.
    ///
    /// Returns `false` when the owning view is torn down; the driver must
    /// then stop issuing fetches. In-flight requests may still complete
    /// and are discarded harmlessly.
    async fn became_visible(&mut self) -> bool;
}
