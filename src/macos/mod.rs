//! macOS-specific functionality

use winit::event_loop::EventLoopBuilder;
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};

/// Status bar only: no Dock icon, no app menu
pub const ACTIVATION_POLICY: ActivationPolicy = ActivationPolicy::Accessory;

/// Apply the activation policy through winit. Setting it on NSApp directly
/// doesn't stick: winit resets unbundled apps to Regular once launching finishes.
pub fn configure_event_loop(builder: &mut EventLoopBuilder<()>) {
    builder.with_activation_policy(ACTIVATION_POLICY);
}
