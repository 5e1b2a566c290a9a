use super::retile::{do_recompute, do_refresh_stacking, LayoutPolicy};
use crate::event::{EventSource, Handler};
use crate::platform::{WindowManipulator, WindowSystem};

/// Register the layout routine for every window lifecycle event.
///
/// Added and removed windows always trigger a full pass. Activation only
/// refreshes stacking in splitscreen modes; in fullscreen mode it runs the
/// full pass.
pub fn bind<H, S>(source: &mut S, policy: LayoutPolicy)
where
    H: WindowSystem + WindowManipulator + 'static,
    S: EventSource<H>,
{
    tracing::info!(
        "Binding {} layout for class '{}'",
        policy.mode,
        policy.classifier.managed_class()
    );

    source.on_window_added(recompute_handler(policy.clone()));
    source.on_window_removed(recompute_handler(policy.clone()));

    if policy.mode.is_splitscreen() {
        source.on_window_activated(Box::new(move |host: &H| {
            do_refresh_stacking(host, &policy);
        }));
    } else {
        source.on_window_activated(recompute_handler(policy));
    }
}

/// One full layout pass, logging instead of propagating failure: the next
/// event retries with a fresh view of the host.
pub fn run_recompute<H: WindowSystem + WindowManipulator>(host: &H, policy: &LayoutPolicy) {
    match do_recompute(host, policy) {
        Ok(summary) if summary.skipped > 0 => {
            tracing::info!(
                "Layout applied to {} windows, {} skipped",
                summary.placed,
                summary.skipped
            );
        }
        Ok(_) => {}
        Err(e) => tracing::error!("Layout pass aborted: {}", e),
    }
}

fn recompute_handler<H>(policy: LayoutPolicy) -> Handler<H>
where
    H: WindowSystem + WindowManipulator + 'static,
{
    Box::new(move |host: &H| run_recompute(host, &policy))
}

#[cfg(test)]
mod tests {
    use twinverse_ipc::LayoutMode;

    use super::*;
    use crate::core::WindowClassifier;
    use crate::event::{Dispatcher, HostEvent};
    use crate::platform::mock::{create_test_monitor, create_test_window, MockHost, Mutation};

    fn host() -> MockHost {
        MockHost::new()
            .with_windows(vec![
                create_test_window(1, "gamescope"),
                create_test_window(2, "gamescope"),
                create_test_window(3, "plasmashell"),
            ])
            .with_monitors(vec![create_test_monitor(0, 0, 0, 1920, 1080)])
            .with_active(Some(1))
    }

    fn bound(mode: LayoutMode) -> Dispatcher<MockHost> {
        let mut dispatcher = Dispatcher::new();
        bind(
            &mut dispatcher,
            LayoutPolicy::new(mode, WindowClassifier::default()),
        );
        dispatcher
    }

    fn has_frames(host: &MockHost) -> bool {
        host.mutations()
            .iter()
            .any(|m| matches!(m, Mutation::FrameGeometry(..)))
    }

    #[test]
    fn test_added_and_removed_run_full_pass() {
        let host = host();
        let mut dispatcher = bound(LayoutMode::Horizontal);

        for event in [HostEvent::WindowAdded(2), HostEvent::WindowRemoved(4)] {
            host.clear_mutations();
            assert_eq!(dispatcher.dispatch(event, &host), 1);
            assert!(has_frames(&host));
            assert_eq!(host.keep_above_of(1), Some(true));
        }
    }

    #[test]
    fn test_activation_only_restacks_in_splitscreen() {
        let host = host();
        let mut dispatcher = bound(LayoutMode::Vertical);

        dispatcher.dispatch(HostEvent::WindowActivated(Some(1)), &host);

        assert!(!has_frames(&host));
        assert_eq!(
            host.mutations(),
            vec![Mutation::KeepAbove(1, true), Mutation::KeepAbove(2, true)]
        );
    }

    #[test]
    fn test_activation_runs_full_pass_in_fullscreen() {
        let host = host();
        let mut dispatcher = bound(LayoutMode::Fullscreen);

        dispatcher.dispatch(HostEvent::WindowActivated(Some(3)), &host);

        assert!(has_frames(&host));
        assert_eq!(host.keep_above_of(1), None);
    }

    #[test]
    fn test_failed_pass_does_not_panic() {
        let host = MockHost::new().with_windows(vec![create_test_window(1, "gamescope")]);
        let mut dispatcher = bound(LayoutMode::Horizontal);

        dispatcher.dispatch(HostEvent::WindowAdded(1), &host);

        assert!(host.mutations().is_empty());
    }
}
