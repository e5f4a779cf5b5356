// Spectra state managers
// The tab session owns every open tab and is the single place shell commands and page signals mutate state.

pub mod tab_session;
