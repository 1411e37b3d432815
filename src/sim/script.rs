//! Step syntax for scripted sessions (`folio simulate`).
//!
//! | Step | Meaning |
//! |------|---------|
//! | `scroll=<px>` | user scrolls to an absolute offset |
//! | `toggle` | press the menu toggle |
//! | `nav=<id>` | click an in-page link (`about`, `#contact`, …) |
//! | `wait=<ms>` | let animations run for a while |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SimulateError {
    #[error("unknown step '{0}' (expected scroll=<px>, toggle, nav=<id>, or wait=<ms>)")]
    UnknownStep(String),
    #[error("invalid number in step '{0}'")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Scroll(f64),
    Toggle,
    Navigate(String),
    Wait(Duration),
}

impl FromStr for Step {
    type Err = SimulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "toggle" {
            return Ok(Step::Toggle);
        }
        let Some((key, value)) = s.split_once('=') else {
            return Err(SimulateError::UnknownStep(s.to_string()));
        };
        match key {
            "scroll" => value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(Step::Scroll)
                .ok_or_else(|| SimulateError::InvalidNumber(s.to_string())),
            "wait" => value
                .parse::<u64>()
                .map(|ms| Step::Wait(Duration::from_millis(ms)))
                .map_err(|_| SimulateError::InvalidNumber(s.to_string())),
            "nav" => Ok(Step::Navigate(value.to_string())),
            _ => Err(SimulateError::UnknownStep(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Scroll(px) => write!(f, "scroll={px}"),
            Step::Toggle => write!(f, "toggle"),
            Step::Navigate(id) => write!(f, "nav={id}"),
            Step::Wait(d) => write!(f, "wait={}", d.as_millis()),
        }
    }
}

/// Parse a whole script, failing on the first bad step.
pub fn parse_steps<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Step>, SimulateError> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_step_kind() {
        let steps = parse_steps(&["scroll=100", "toggle", "nav=#about", "wait=600"]).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Scroll(100.0),
                Step::Toggle,
                Step::Navigate("#about".to_string()),
                Step::Wait(Duration::from_millis(600)),
            ]
        );
    }

    #[test]
    fn empty_nav_target_is_allowed() {
        assert_eq!("nav=".parse::<Step>(), Ok(Step::Navigate(String::new())));
    }

    #[test]
    fn rejects_unknown_steps() {
        assert_eq!(
            "jump=3".parse::<Step>(),
            Err(SimulateError::UnknownStep("jump=3".to_string()))
        );
        assert!(matches!(
            "toggle-menu".parse::<Step>(),
            Err(SimulateError::UnknownStep(_))
        ));
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(matches!(
            "scroll=far".parse::<Step>(),
            Err(SimulateError::InvalidNumber(_))
        ));
        assert!(matches!(
            "scroll=NaN".parse::<Step>(),
            Err(SimulateError::InvalidNumber(_))
        ));
        assert!(matches!(
            "wait=-1".parse::<Step>(),
            Err(SimulateError::InvalidNumber(_))
        ));
    }

    #[test]
    fn display_matches_input_syntax() {
        for raw in ["scroll=40", "toggle", "nav=contact", "wait=250"] {
            assert_eq!(raw.parse::<Step>().unwrap().to_string(), raw);
        }
    }
}
