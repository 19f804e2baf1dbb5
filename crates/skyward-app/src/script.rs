//! Scripted key presses for headless flights.
//!
//! A script is a list of `key@start..end` entries (seconds from launch),
//! separated by commas or whitespace: `"Shift@0..2, ArrowLeft@1.5..3, q@4..6"`.

use std::str::FromStr;

use skyward_core::commands::FlightCommand;

use crate::error::AppError;

/// One key held from `start_secs` until `end_secs`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPress {
    pub key: String,
    pub code: String,
    pub start_secs: f64,
    pub end_secs: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyScript {
    presses: Vec<KeyPress>,
}

impl KeyScript {
    pub fn presses(&self) -> &[KeyPress] {
        &self.presses
    }

    /// Time of the last release.
    pub fn duration_secs(&self) -> f64 {
        self.presses.iter().map(|p| p.end_secs).fold(0.0, f64::max)
    }

    /// Key signals falling in `[from, to)`, in time order. A press and a
    /// release at the same instant keep the press first.
    pub fn commands_between(&self, from: f64, to: f64) -> Vec<FlightCommand> {
        let mut timed: Vec<(f64, u8, FlightCommand)> = Vec::new();
        for p in &self.presses {
            if (from..to).contains(&p.start_secs) {
                timed.push((p.start_secs, 0, FlightCommand::key_down(&p.key, &p.code)));
            }
            if (from..to).contains(&p.end_secs) {
                timed.push((p.end_secs, 1, FlightCommand::key_up(&p.key, &p.code)));
            }
        }
        timed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        timed.into_iter().map(|(_, _, cmd)| cmd).collect()
    }
}

impl FromStr for KeyScript {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let presses = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
            .map(parse_press)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { presses })
    }
}

fn parse_press(entry: &str) -> Result<KeyPress, AppError> {
    let invalid = |reason: &str| AppError::InvalidScript {
        entry: entry.to_string(),
        reason: reason.to_string(),
    };

    let (key, window) = entry
        .split_once('@')
        .ok_or_else(|| invalid("expected key@start..end"))?;
    let (start, end) = window
        .split_once("..")
        .ok_or_else(|| invalid("expected start..end"))?;
    let start_secs: f64 = start.parse().map_err(|_| invalid("start is not a number"))?;
    let end_secs: f64 = end.parse().map_err(|_| invalid("end is not a number"))?;
    if !start_secs.is_finite() || !end_secs.is_finite() || start_secs < 0.0 {
        return Err(invalid("times must be finite and non-negative"));
    }
    if end_secs <= start_secs {
        return Err(invalid("release must come after press"));
    }

    let code = key_code(key).ok_or_else(|| invalid("unknown key"))?;
    Ok(KeyPress {
        key: key.to_string(),
        code,
        start_secs,
        end_secs,
    })
}

/// Physical code a keyboard would report alongside `key`.
fn key_code(key: &str) -> Option<String> {
    match key {
        "Shift" => Some("ShiftLeft".to_string()),
        "Control" => Some("ControlLeft".to_string()),
        "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" => Some(key.to_string()),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    Some(format!("Key{}", c.to_ascii_uppercase()))
                }
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries() {
        let script: KeyScript = "Shift@0..2, ArrowLeft@1.5..3 q@4..6".parse().unwrap();
        let presses = script.presses();
        assert_eq!(presses.len(), 3);
        assert_eq!(presses[0].code, "ShiftLeft");
        assert_eq!(presses[1].key, "ArrowLeft");
        assert_eq!(presses[1].start_secs, 1.5);
        assert_eq!(presses[2].code, "KeyQ");
        assert_eq!(script.duration_secs(), 6.0);
    }

    #[test]
    fn test_rejects_bad_entries() {
        for bad in ["Shift", "Shift@2", "Shift@a..2", "Shift@2..1", "Tab@0..1", "e@-1..1"] {
            let err = bad.parse::<KeyScript>().unwrap_err();
            assert!(
                matches!(err, AppError::InvalidScript { ref entry, .. } if entry == bad),
                "{} gave {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_empty_script() {
        let script: KeyScript = "  ".parse().unwrap();
        assert!(script.presses().is_empty());
        assert!(script.commands_between(0.0, 100.0).is_empty());
    }

    #[test]
    fn test_commands_between_windows() {
        let script: KeyScript = "e@0.5..1.0".parse().unwrap();
        assert!(script.commands_between(0.0, 0.5).is_empty());
        assert_eq!(
            script.commands_between(0.5, 0.6),
            vec![FlightCommand::key_down("e", "KeyE")]
        );
        assert_eq!(
            script.commands_between(0.9, 1.1),
            vec![FlightCommand::key_up("e", "KeyE")]
        );
        // A slow frame covering the whole press delivers both, in order.
        assert_eq!(
            script.commands_between(0.0, 2.0),
            vec![
                FlightCommand::key_down("e", "KeyE"),
                FlightCommand::key_up("e", "KeyE")
            ]
        );
    }
}
