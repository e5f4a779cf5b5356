//! Property-based tests for TabSession lifecycle operations.
//!
//! For any sequence of opens, closes and switches, the session keeps at
//! least one tab, exactly one active tab whose view is marked active, and an
//! address bar that matches the active tab's view.

use proptest::prelude::*;
use spectra::engine::headless::HeadlessEngine;
use spectra::engine::{PageView, SignalQueue};
use spectra::managers::tab_session::TabSession;
use spectra::types::errors::TabError;
use spectra::types::settings::ShellSettings;

/// Operations that can be performed on the session.
#[derive(Debug, Clone)]
enum TabOp {
    Open,
    Close(usize), // index into current tab order
    Switch(usize),
    Navigate(usize), // picks one of a few hosts
}

const HOSTS: [&str; 3] = ["https://a.example/", "https://www.google.com/", "b.example"];

/// Strategy for generating a sequence of tab operations.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Open),
            3 => (0..20usize).prop_map(TabOp::Close),
            2 => (0..20usize).prop_map(TabOp::Switch),
            2 => (0..HOSTS.len()).prop_map(TabOp::Navigate),
        ],
        1..60,
    )
}

fn check_invariants(session: &TabSession<HeadlessEngine>) -> Result<(), TestCaseError> {
    let ids = session.tab_ids();
    prop_assert!(!ids.is_empty());
    prop_assert!(ids.contains(&session.active_id()));

    let active_views = ids
        .iter()
        .filter(|id| session.view(**id).map(|v| v.is_active()).unwrap_or(false))
        .count();
    prop_assert_eq!(active_views, 1);
    prop_assert!(session.view(session.active_id()).unwrap().is_active());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn tab_session_invariants_hold(ops in arb_tab_ops()) {
        let queue = SignalQueue::new();
        let mut session =
            TabSession::new(HeadlessEngine::new(queue.clone()), ShellSettings::default()).unwrap();
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Open => {
                    let id = session.open_tab(None, None).unwrap();
                    expected_count += 1;
                    prop_assert_eq!(session.active_id(), id);
                }
                TabOp::Close(idx) => {
                    let ids = session.tab_ids();
                    let pick = ids[idx % ids.len()];
                    match session.close_tab(pick) {
                        Ok(()) => {
                            expected_count -= 1;
                            prop_assert!(!session.tab_ids().contains(&pick));
                        }
                        Err(TabError::LastTab) => prop_assert_eq!(ids.len(), 1),
                        Err(e) => prop_assert!(false, "unexpected error: {}", e),
                    }
                }
                TabOp::Switch(idx) => {
                    let ids = session.tab_ids();
                    let pick = ids[idx % ids.len()];
                    session.activate(pick).unwrap();
                    prop_assert_eq!(session.active_id(), pick);
                }
                TabOp::Navigate(idx) => session.navigate_active(HOSTS[*idx]),
            }

            for signal in queue.drain() {
                session.handle_signal(signal);
            }

            prop_assert_eq!(session.tab_count(), expected_count);
            prop_assert_eq!(
                session.current_address(),
                session.active_view().current_address()
            );
            check_invariants(&session)?;
        }
    }

    #[test]
    fn closing_active_tab_activates_its_neighbor(extra in 1..8usize, pick in 0..9usize) {
        let queue = SignalQueue::new();
        let mut session =
            TabSession::new(HeadlessEngine::new(queue.clone()), ShellSettings::default()).unwrap();
        for _ in 0..extra {
            session.open_tab(None, None).unwrap();
        }

        let ids = session.tab_ids();
        let index = pick % ids.len();
        session.activate(ids[index]).unwrap();
        session.close_tab(ids[index]).unwrap();

        let remaining = session.tab_ids();
        let expected = remaining[index.min(remaining.len() - 1)];
        prop_assert_eq!(session.active_id(), expected);
        check_invariants(&session)?;
    }
}
