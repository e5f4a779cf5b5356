//! Customization policy: decides whether a page receives the background override.
//!
//! Pure: the decision depends only on the page address, the override, and the
//! configured target host.

use tracing::debug;

use crate::types::customization::{BackgroundOverride, BackgroundStyle, CustomizationAction};

/// Evaluate the policy for one page.
///
/// Only an exact host match authorizes a script; any other host, or an
/// address that does not parse, is a no-op.
pub fn evaluate(
    address: &str,
    background: &BackgroundOverride,
    designated_host: &str,
) -> CustomizationAction {
    let host = url::Url::parse(address)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string));

    if host.as_deref() != Some(designated_host) {
        debug!(
            address,
            designated_host, "background can only be applied to the designated host"
        );
        return CustomizationAction::NoAction;
    }

    CustomizationAction::RunScript(BackgroundStyle {
        color: background.color.clone().unwrap_or_default(),
        image: background.image.clone(),
    })
}
