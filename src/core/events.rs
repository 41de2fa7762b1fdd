//! Application event definitions

use crate::tray::TrayAction;
use tokio::sync::mpsc;
use winit::event_loop::EventLoopProxy;

/// Wrapper around `mpsc::UnboundedSender<AppEvent>` that also wakes the winit
/// event loop after every send, so the loop can sit in `ControlFlow::Wait`.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<AppEvent>,
    proxy: EventLoopProxy<()>,
}

impl EventSender {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, proxy: EventLoopProxy<()>) -> Self {
        Self { tx, proxy }
    }

    pub fn send(&self, event: AppEvent) -> Result<(), mpsc::error::SendError<AppEvent>> {
        let result = self.tx.send(event);
        let _ = self.proxy.send_event(());
        result
    }
}

/// Application-wide events delivered to the event loop thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Tray menu action triggered
    TrayAction(TrayAction),
}
