//! Top-level rendering entry point.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the state, then
//! print it through the components.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; every region pads itself to the full width.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    tracing::trace!(rows = rows, cols = cols, has_input = vm.input_box.is_some(), "rendering frame");
    components::render_frame(vm, theme, cols, rows);
}
