// User commands accepted by a session
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  plug                          plug in / unplug the charger
  charge                        start / stop charging (only while plugged)
  toggle <setting>              flip alertsEnabled or funSounds
  threshold <setting> <value>   set lowThreshold or criticalThreshold (value 0-255)
  status                        show the current state
  help                          show this help
  quit                          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TogglePlugged,
    ToggleCharging,
    ToggleSetting(String),
    SetThreshold(String, u8),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument for {command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("invalid threshold value: {0}")]
    InvalidValue(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        match verb.as_str() {
            "plug" | "unplug" => Ok(Command::TogglePlugged),
            "charge" => Ok(Command::ToggleCharging),
            "toggle" => {
                let name = words.next().ok_or(CommandError::MissingArgument {
                    command: "toggle",
                    expected: "<setting>",
                })?;
                Ok(Command::ToggleSetting(name.to_string()))
            }
            "threshold" => {
                let missing = CommandError::MissingArgument {
                    command: "threshold",
                    expected: "<setting> <value>",
                };
                let name = words.next().ok_or(missing.clone())?;
                let raw = words.next().ok_or(missing)?;
                let value = raw
                    .parse::<u8>()
                    .map_err(|_| CommandError::InvalidValue(raw.to_string()))?;
                Ok(Command::SetThreshold(name.to_string(), value))
            }
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("plug".parse::<Command>(), Ok(Command::TogglePlugged));
        assert_eq!("  CHARGE ".parse::<Command>(), Ok(Command::ToggleCharging));
        assert_eq!(
            "toggle alertsEnabled".parse::<Command>(),
            Ok(Command::ToggleSetting("alertsEnabled".to_string()))
        );
        assert_eq!(
            "threshold criticalThreshold 12".parse::<Command>(),
            Ok(Command::SetThreshold("criticalThreshold".to_string(), 12))
        );
        assert_eq!("quit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_help_mentions_threshold_range() {
        assert!(HELP.contains("(value 0-255)"));
        assert_eq!(
            "threshold low 300".parse::<Command>(),
            Err(CommandError::InvalidValue("300".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(CommandError::Unknown("dance".to_string()))
        );
        assert!(matches!(
            "toggle".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "toggle", .. })
        ));
        assert!(matches!(
            "threshold low".parse::<Command>(),
            Err(CommandError::MissingArgument { command: "threshold", .. })
        ));
        assert_eq!(
            "threshold low -4".parse::<Command>(),
            Err(CommandError::InvalidValue("-4".to_string()))
        );
    }
}
