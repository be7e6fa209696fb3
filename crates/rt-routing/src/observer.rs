//! Synchronisation observer trait for progress reporting.

use rt_core::StopId;

use crate::SyncReport;

/// Callbacks invoked by [`Synchroniser::synchronise`][crate::Synchroniser::synchronise].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — sweep counter
///
/// ```rust
/// use rt_core::StopId;
/// use rt_routing::SyncObserver;
///
/// #[derive(Default)]
/// struct SweepCounter { sweeps: u32 }
///
/// impl SyncObserver for SweepCounter {
///     fn on_sweep_end(&mut self, _home: StopId, _sweep: u32, _changed: usize) {
///         self.sweeps += 1;
///     }
/// }
/// ```
pub trait SyncObserver {
    /// Called after every full sweep over the reachable component.
    ///
    /// `changed` is the number of transfers in that sweep which modified the
    /// receiving table.  A sweep with `changed == 0` is the last one.
    fn on_sweep_end(&mut self, _home: StopId, _sweep: u32, _changed: usize) {}

    /// Called once the component reachable from `home` reaches its fixed point.
    fn on_converged(&mut self, _home: StopId, _report: &SyncReport) {}
}

/// A [`SyncObserver`] that does nothing.
pub struct NoopObserver;

impl SyncObserver for NoopObserver {}
