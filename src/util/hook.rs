use tracing::error;

use crate::ui::tui;

/// Restores the terminal and records the panic before the default hook prints it.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::Tui::restore();
        error!(panic = %panic_info, "application panicked");
        hook(panic_info);
    }));
}
