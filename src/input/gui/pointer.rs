use crate::core::data::pixel_coordinate::PixelCoordinate;
use crate::input::interaction::{InteractionRecord, Phase, PointerButton};
use winit::event::{ElementState, MouseButton};

#[must_use]
pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Other(1),
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(n) => PointerButton::Other(n),
    }
}

#[must_use]
pub fn phase(state: ElementState) -> Phase {
    match state {
        ElementState::Pressed => Phase::Press,
        ElementState::Released => Phase::Release,
    }
}

#[must_use]
pub fn interaction_record(
    pixel: PixelCoordinate,
    button: MouseButton,
    state: ElementState,
) -> InteractionRecord {
    InteractionRecord {
        col: pixel.col,
        row: pixel.row,
        button: pointer_button(button),
        phase: phase(state),
    }
}

/// Last frame pixel under the pointer. Button events with the pointer
/// outside the frame, or outside the window, produce no record.
#[derive(Debug, Default)]
pub struct PointerTracker {
    cursor: Option<PixelCoordinate>,
}

impl PointerTracker {
    pub fn moved(&mut self, pixel: Option<PixelCoordinate>) {
        self.cursor = pixel;
    }

    pub fn left(&mut self) {
        self.cursor = None;
    }

    #[must_use]
    pub fn record(&self, button: MouseButton, state: ElementState) -> Option<InteractionRecord> {
        self.cursor
            .map(|pixel| interaction_record(pixel, button, state))
    }
}
