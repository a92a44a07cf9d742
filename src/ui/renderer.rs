//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a `UIViewModel` from `AppState`, then hand
//! it to the components. Output goes to stdout, which Zellij draws into the
//! plugin pane.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Chooses between the status screen (loading or failed) and the page layout.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if vm.empty_state.is_some() {
        components::render_status(vm, theme, cols, rows);
    } else {
        components::render_page(vm, theme, cols, rows);
    }
}
