//! View state and keyboard mapping.
//!
//! All parameter mutation funnels through [`ViewParams::apply`], which clamps
//! every field into its valid range and reports whether the view actually
//! changed, so the caller can drive its redraw flag off the return value.

use crate::color::ColorScheme;
use winit::event::VirtualKeyCode;

pub const DEFAULT_ZOOM_DEPTH: f64 = 0.004;
pub const DEFAULT_MAX_ITERATIONS: u32 = 120;

/// Pan distance in pixels per key press; multiplied by `zoom_depth` so the
/// on-screen step stays constant at any zoom.
const PAN_STEP_PIXELS: f64 = 40.0;
const ZOOM_STEP: f64 = 0.9;
const ITERATION_STEP: u32 = 10;
const MIN_ZOOM_DEPTH: f64 = 1e-15;
const MAX_ZOOM_DEPTH: f64 = 0.1;
const MAX_ITERATION_LIMIT: u32 = 100_000;
const MAX_STRIDE: u32 = 16;

/// Every input the application responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    MoreIterations,
    FewerIterations,
    CoarserSampling,
    FinerSampling,
    CycleColorScheme,
    Reset,
    Quit,
}

/// Keyboard layout: WASD pans, =/- zooms, arrows trade detail for speed,
/// brackets change the sampling stride, C cycles color schemes, R resets.
pub fn action_for_key(key: VirtualKeyCode) -> Option<Action> {
    match key {
        VirtualKeyCode::Equals | VirtualKeyCode::Plus | VirtualKeyCode::NumpadAdd => {
            Some(Action::ZoomIn)
        }
        VirtualKeyCode::Minus | VirtualKeyCode::NumpadSubtract => Some(Action::ZoomOut),
        VirtualKeyCode::W => Some(Action::PanUp),
        VirtualKeyCode::S => Some(Action::PanDown),
        VirtualKeyCode::A => Some(Action::PanLeft),
        VirtualKeyCode::D => Some(Action::PanRight),
        VirtualKeyCode::Right => Some(Action::MoreIterations),
        VirtualKeyCode::Left => Some(Action::FewerIterations),
        VirtualKeyCode::LBracket => Some(Action::CoarserSampling),
        VirtualKeyCode::RBracket => Some(Action::FinerSampling),
        VirtualKeyCode::C => Some(Action::CycleColorScheme),
        VirtualKeyCode::R => Some(Action::Reset),
        VirtualKeyCode::Escape => Some(Action::Quit),
        _ => None,
    }
}

/// The complete view state a frame is rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Complex-plane distance covered by one pixel; smaller is deeper.
    pub zoom_depth: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub max_iterations: u32,
    /// Pixel sampling interval; 1 renders every pixel.
    pub stride: u32,
    pub scheme: ColorScheme,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            zoom_depth: DEFAULT_ZOOM_DEPTH,
            offset_x: 0.0,
            offset_y: 0.0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stride: 1,
            scheme: ColorScheme::default(),
        }
    }
}

impl ViewParams {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies one action and returns whether the view changed. `Quit` is the
    /// event loop's business and never mutates anything here.
    pub fn apply(&mut self, action: Action) -> bool {
        let before = *self;
        match action {
            Action::ZoomIn => {
                self.zoom_depth = (self.zoom_depth * ZOOM_STEP).clamp(MIN_ZOOM_DEPTH, MAX_ZOOM_DEPTH)
            }
            Action::ZoomOut => {
                self.zoom_depth = (self.zoom_depth / ZOOM_STEP).clamp(MIN_ZOOM_DEPTH, MAX_ZOOM_DEPTH)
            }
            Action::PanUp => self.offset_y -= self.pan_step(),
            Action::PanDown => self.offset_y += self.pan_step(),
            Action::PanLeft => self.offset_x -= self.pan_step(),
            Action::PanRight => self.offset_x += self.pan_step(),
            Action::MoreIterations => {
                self.max_iterations = (self.max_iterations + ITERATION_STEP).min(MAX_ITERATION_LIMIT)
            }
            Action::FewerIterations => {
                self.max_iterations = self.max_iterations.saturating_sub(ITERATION_STEP).max(1)
            }
            Action::CoarserSampling => self.stride = (self.stride * 2).min(MAX_STRIDE),
            Action::FinerSampling => self.stride = (self.stride / 2).max(1),
            Action::CycleColorScheme => self.scheme = self.scheme.next(),
            Action::Reset => self.reset(),
            Action::Quit => {}
        }
        *self != before
    }

    fn pan_step(&self) -> f64 {
        PAN_STEP_PIXELS * self.zoom_depth
    }

    /// One-line summary for the window title.
    pub fn status_line(&self) -> String {
        format!(
            "iters {} | zoom {:.3e} | stride {} | {}",
            self.max_iterations,
            self.zoom_depth,
            self.stride,
            self.scheme.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_right_at_default_zoom_moves_a_fixed_plane_step() {
        let mut params = ViewParams::default();
        assert!(params.apply(Action::PanRight));
        assert_eq!(params.offset_x, 40.0 * DEFAULT_ZOOM_DEPTH);
        assert!((params.offset_x - 0.16).abs() < 1e-12);
    }

    #[test]
    fn zoom_round_trip_returns_to_start() {
        let mut params = ViewParams::default();
        for _ in 0..20 {
            params.apply(Action::ZoomIn);
        }
        for _ in 0..20 {
            params.apply(Action::ZoomOut);
        }
        assert!((params.zoom_depth - DEFAULT_ZOOM_DEPTH).abs() < 1e-12);
    }

    #[test]
    fn reset_restores_defaults_after_arbitrary_mutation() {
        let mut params = ViewParams::default();
        for action in [
            Action::ZoomIn,
            Action::PanUp,
            Action::PanLeft,
            Action::MoreIterations,
            Action::CoarserSampling,
            Action::CycleColorScheme,
        ] {
            params.apply(action);
        }
        assert_ne!(params, ViewParams::default());
        assert!(params.apply(Action::Reset));
        assert_eq!(params, ViewParams::default());
    }

    #[test]
    fn iteration_budget_never_drops_below_one() {
        let mut params = ViewParams::default();
        for _ in 0..50 {
            params.apply(Action::FewerIterations);
        }
        assert_eq!(params.max_iterations, 1);
        // At the floor the action no longer changes anything.
        assert!(!params.apply(Action::FewerIterations));
    }

    #[test]
    fn stride_stays_within_bounds() {
        let mut params = ViewParams::default();
        assert!(!params.apply(Action::FinerSampling));
        for _ in 0..10 {
            params.apply(Action::CoarserSampling);
        }
        assert_eq!(params.stride, MAX_STRIDE);
        for _ in 0..10 {
            params.apply(Action::FinerSampling);
        }
        assert_eq!(params.stride, 1);
    }

    #[test]
    fn zoom_depth_is_clamped_positive() {
        let mut params = ViewParams::default();
        for _ in 0..10_000 {
            params.apply(Action::ZoomIn);
        }
        assert!(params.zoom_depth >= MIN_ZOOM_DEPTH);
        for _ in 0..10_000 {
            params.apply(Action::ZoomOut);
        }
        assert!(params.zoom_depth <= MAX_ZOOM_DEPTH);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(action_for_key(VirtualKeyCode::Z), None);
        assert_eq!(action_for_key(VirtualKeyCode::Space), None);
        assert_eq!(action_for_key(VirtualKeyCode::Escape), Some(Action::Quit));
        assert_eq!(action_for_key(VirtualKeyCode::Equals), Some(Action::ZoomIn));
    }

    #[test]
    fn quit_does_not_mutate_the_view() {
        let mut params = ViewParams::default();
        assert!(!params.apply(Action::Quit));
        assert_eq!(params, ViewParams::default());
    }
}
