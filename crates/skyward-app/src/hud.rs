//! Cockpit HUD: readouts, warning frame, crash overlay.
//!
//! The HUD writes into a `Surface` the host provides. Every element it needs
//! is looked up once when the HUD is bound, so a missing element is reported
//! at startup instead of on the first frame.

use std::collections::BTreeMap;

use skyward_core::state::{CrashOverlayView, FlightSnapshot, HudView};

use crate::error::{AppError, Result};

/// Readout element ids, in display order.
pub const HUD_FIELDS: [&str; 6] = ["speed", "altitude", "pitch", "roll", "yaw", "score"];

/// The panel that carries the warning border.
pub const HUD_FRAME: &str = "hud-panel";

/// Look of the HUD panel border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameStyle {
    #[default]
    Normal,
    Warning,
}

impl FrameStyle {
    pub fn border_color(self) -> &'static str {
        match self {
            FrameStyle::Normal => "#00ff00",
            FrameStyle::Warning => "#ff0000",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            FrameStyle::Normal => "0 0 20px rgba(0, 255, 0, 0.3)",
            FrameStyle::Warning => "0 0 30px rgba(255, 0, 0, 0.8)",
        }
    }
}

/// Where HUD output lands.
pub trait Surface {
    fn has_element(&self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str);
    fn set_frame_style(&mut self, style: FrameStyle);
    /// Show the overlay lines, or remove the overlay with `None`.
    fn set_overlay(&mut self, lines: Option<Vec<String>>);
}

pub struct Hud<S: Surface> {
    surface: S,
    overlay_shown: bool,
}

impl<S: Surface> Hud<S> {
    /// Attach to a surface, failing if any readout or the frame is missing.
    pub fn bind(surface: S) -> Result<Self> {
        for id in HUD_FIELDS.iter().chain(std::iter::once(&HUD_FRAME)) {
            if !surface.has_element(id) {
                return Err(AppError::MissingElement(id.to_string()));
            }
        }
        Ok(Self {
            surface,
            overlay_shown: false,
        })
    }

    /// Write one frame's readouts.
    pub fn present(&mut self, snapshot: &FlightSnapshot) {
        let hud = &snapshot.hud;
        for (id, value) in HUD_FIELDS.iter().zip(readouts(hud)) {
            self.surface.set_text(id, &value);
        }
        self.surface.set_frame_style(if hud.collision_warning {
            FrameStyle::Warning
        } else {
            FrameStyle::Normal
        });

        match &snapshot.crash_overlay {
            Some(overlay) => {
                self.surface.set_overlay(Some(crash_lines(overlay)));
                self.overlay_shown = true;
            }
            None if self.overlay_shown => {
                self.surface.set_overlay(None);
                self.overlay_shown = false;
            }
            None => {}
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

fn readouts(hud: &HudView) -> [String; 6] {
    [
        hud.speed.to_string(),
        hud.altitude.to_string(),
        hud.pitch.to_string(),
        hud.roll.to_string(),
        hud.yaw.to_string(),
        hud.score.to_string(),
    ]
}

/// One-line summary of the readouts for the log.
pub fn status_line(hud: &HudView) -> String {
    let mut line = HUD_FIELDS
        .iter()
        .zip(readouts(hud))
        .map(|(id, value)| format!("{} {}", id, value))
        .collect::<Vec<_>>()
        .join(" | ");
    if hud.collision_warning {
        line.push_str(" | WARNING");
    }
    line
}

/// Crash screen text.
pub fn crash_lines(overlay: &CrashOverlayView) -> Vec<String> {
    vec![
        "CRASH!".to_string(),
        "You hit a balloon!".to_string(),
        format!("Final Score: {} points", overlay.final_score),
        format!("Restarting in {} seconds...", overlay.remaining_secs.ceil() as u32),
    ]
}

/// In-memory surface for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct TextSurface {
    texts: BTreeMap<String, String>,
    pub frame: FrameStyle,
    pub overlay: Option<Vec<String>>,
}

impl TextSurface {
    /// A surface containing exactly the given elements.
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            texts: ids.into_iter().map(|id| (id.to_string(), String::new())).collect(),
            ..Default::default()
        }
    }

    /// Every element the HUD binds to.
    pub fn cockpit() -> Self {
        Self::with_elements(HUD_FIELDS.iter().copied().chain([HUD_FRAME]))
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }
}

impl Surface for TextSurface {
    fn has_element(&self, id: &str) -> bool {
        self.texts.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.texts.get_mut(id) {
            slot.clear();
            slot.push_str(text);
        }
    }

    fn set_frame_style(&mut self, style: FrameStyle) {
        self.frame = style;
    }

    fn set_overlay(&mut self, lines: Option<Vec<String>>) {
        self.overlay = lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(hud: HudView) -> FlightSnapshot {
        FlightSnapshot {
            hud,
            ..Default::default()
        }
    }

    #[test]
    fn test_bind_fails_on_missing_readout() {
        let surface = TextSurface::with_elements(["speed", "altitude", "pitch", "roll", "yaw", HUD_FRAME]);
        match Hud::bind(surface) {
            Err(AppError::MissingElement(id)) => assert_eq!(id, "score"),
            other => panic!("expected MissingElement, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_bind_fails_on_missing_frame() {
        let surface = TextSurface::with_elements(HUD_FIELDS);
        assert!(matches!(
            Hud::bind(surface),
            Err(AppError::MissingElement(id)) if id == HUD_FRAME
        ));
    }

    #[test]
    fn test_present_writes_readouts_and_warning() {
        let mut hud = Hud::bind(TextSurface::cockpit()).unwrap();
        hud.present(&snapshot(HudView {
            speed: 102,
            altitude: 498,
            pitch: -3,
            roll: 12,
            yaw: -5,
            score: 0,
            collision_warning: true,
        }));

        let surface = hud.surface();
        assert_eq!(surface.text("speed"), Some("102"));
        assert_eq!(surface.text("altitude"), Some("498"));
        assert_eq!(surface.text("pitch"), Some("-3"));
        assert_eq!(surface.text("roll"), Some("12"));
        assert_eq!(surface.text("yaw"), Some("-5"));
        assert_eq!(surface.text("score"), Some("0"));
        assert_eq!(surface.frame, FrameStyle::Warning);
    }

    #[test]
    fn test_status_line() {
        let line = status_line(&HudView {
            speed: 100,
            altitude: 500,
            yaw: 5,
            collision_warning: true,
            ..Default::default()
        });
        assert_eq!(
            line,
            "speed 100 | altitude 500 | pitch 0 | roll 0 | yaw 5 | score 0 | WARNING"
        );
    }

    #[test]
    fn test_overlay_shown_then_removed() {
        let mut hud = Hud::bind(TextSurface::cockpit()).unwrap();
        let mut snap = snapshot(HudView::default());
        snap.crash_overlay = Some(CrashOverlayView {
            final_score: 4,
            remaining_secs: 2.2,
        });
        hud.present(&snap);
        let lines = hud.surface().overlay.clone().unwrap();
        assert_eq!(lines[2], "Final Score: 4 points");
        assert_eq!(lines[3], "Restarting in 3 seconds...");

        snap.crash_overlay = None;
        hud.present(&snap);
        assert!(hud.surface().overlay.is_none());
        assert_eq!(hud.surface().frame, FrameStyle::Normal);
    }

    #[test]
    fn test_frame_style_colors() {
        assert_eq!(FrameStyle::Warning.border_color(), "#ff0000");
        assert_eq!(FrameStyle::Normal.box_shadow(), "0 0 20px rgba(0, 255, 0, 0.3)");
    }
}
