use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

/// A value with a fixed textual representation in a unit file.
pub trait UnitValue: Copy + 'static {
    /// Name of the value type, used in error messages.
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

fn parse_tag<T: UnitValue>(s: &str) -> Result<T, ParseValueError> {
    T::ALL
        .iter()
        .copied()
        .find(|v| v.as_str() == s)
        .ok_or_else(|| ParseValueError {
            kind: T::KIND,
            value: s.to_string(),
        })
}

macro_rules! unit_value {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $tag)] $variant, )*
        }

        impl UnitValue for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$($name::$variant),*];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_tag(s)
            }
        }
    };
}

unit_value! {
    /// A systemd target used for ordering and installation.
    pub enum Target as "target" {
        Network => "network.target",
        MultiUser => "multi-user.target",
        Socket => "socket.target",
    }
}

unit_value! {
    /// Startup type of the service process.
    pub enum ServiceType as "service type" {
        Simple => "simple",
        /// The service tells systemd when it has finished starting up.
        Notify => "notify",
        /// Stays active while a forked child runs after the parent exits.
        Forking => "forking",
        Dbus => "dbus",
        /// Active only once the start command has exited.
        Oneshot => "oneshot",
        Exec => "exec",
    }
}

unit_value! {
    /// When systemd restarts the service after it exits.
    pub enum Restart as "restart policy" {
        No => "no",
        Always => "always",
        /// Clean exit code or one of SIGHUP, SIGINT, SIGTERM, SIGPIPE.
        OnSuccess => "on-success",
        OnFailure => "on-failure",
        /// Killed by a signal, or an operation timed out.
        OnAbnormal => "on-abnormal",
        OnAbort => "on-abort",
        OnWatchdog => "on-watchdog",
    }
}

unit_value! {
    pub enum SystemdBool as "boolean" {
        Yes => "yes",
        No => "no",
    }
}

impl From<bool> for SystemdBool {
    fn from(value: bool) -> Self {
        if value {
            SystemdBool::Yes
        } else {
            SystemdBool::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_systemd_spelling() {
        assert_eq!(Target::MultiUser.as_str(), "multi-user.target");
        assert_eq!(ServiceType::Oneshot.to_string(), "oneshot");
        assert_eq!(Restart::OnWatchdog.as_str(), "on-watchdog");
        assert_eq!(SystemdBool::from(true).as_str(), "yes");
    }

    #[test]
    fn parses_every_tag() {
        for restart in Restart::ALL {
            assert_eq!(restart.as_str().parse::<Restart>().unwrap(), *restart);
        }
        for target in Target::ALL {
            assert_eq!(target.as_str().parse::<Target>().unwrap(), *target);
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "sometimes".parse::<Restart>().unwrap_err();
        assert_eq!(err.kind, "restart policy");
        assert_eq!(err.to_string(), "invalid restart policy 'sometimes'");
        assert!("Simple".parse::<ServiceType>().is_err());
    }
}
