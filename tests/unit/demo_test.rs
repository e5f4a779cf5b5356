//! The console demo drives every shell operation on the in-memory engine;
//! running it end to end keeps the non-gui binary path exercised.

use spectra::demo;

#[test]
fn test_demo_runs_to_completion() {
    demo::run();
}
