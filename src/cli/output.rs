//! Output formatting utilities for the CLI.

use serde::Serialize;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Render a command result as human text or pretty JSON
pub fn render_output<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render_output(result, json_mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        value: String,
    }

    impl CommandOutput for Sample {
        fn to_human(&self) -> String {
            format!("value is {}", self.value)
        }
    }

    #[test]
    fn test_render_human_and_json() {
        let sample = Sample {
            value: "42".to_string(),
        };

        assert_eq!(render_output(&sample, false), "value is 42");
        let json: serde_json::Value =
            serde_json::from_str(&render_output(&sample, true)).unwrap();
        assert_eq!(json, serde_json::json!({"value": "42"}));
    }
}
