use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when an id string does not carry the expected entity prefix.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid id `{input}`: expected `{expected}-` prefix")]
pub struct ParseIdError {
    pub input: String,
    pub expected: &'static str,
}

macro_rules! branded_id {
    ($name:ident, $prefix:expr) => {
        #[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint the id for a sequence number, zero-padded to three digits
            /// (`evt-001` style).
            pub fn from_seq(seq: usize) -> Self {
                Self(format!("{}-{:03}", $prefix, seq))
            }

            pub fn from_raw(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.strip_prefix(concat!($prefix, "-")).is_some() {
                    Ok(Self(s.to_owned()))
                } else {
                    Err(ParseIdError {
                        input: s.to_owned(),
                        expected: $prefix,
                    })
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

branded_id!(EventId, "evt");
branded_id!(ParticipantId, "part");
branded_id!(OrganizerId, "org");
branded_id!(VenueId, "ven");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_has_prefix() {
        let id = EventId::from_seq(1);
        assert_eq!(id.as_str(), "evt-001");
    }

    #[test]
    fn participant_id_has_prefix() {
        let id = ParticipantId::from_seq(4);
        assert_eq!(id.as_str(), "part-004");
    }

    #[test]
    fn organizer_id_has_prefix() {
        let id = OrganizerId::from_seq(3);
        assert_eq!(id.as_str(), "org-003");
    }

    #[test]
    fn venue_id_has_prefix() {
        let id = VenueId::from_seq(2);
        assert_eq!(id.as_str(), "ven-002");
    }

    #[test]
    fn large_sequence_grows_past_padding() {
        let id = EventId::from_seq(1234);
        assert_eq!(id.as_str(), "evt-1234");
    }

    #[test]
    fn parse_accepts_matching_prefix() {
        let id: EventId = "evt-001".parse().unwrap();
        assert_eq!(id.as_str(), "evt-001");
    }

    #[test]
    fn parse_rejects_wrong_prefix() {
        let err = "ven-001".parse::<EventId>().unwrap_err();
        assert_eq!(err.expected, "evt");
        assert_eq!(err.input, "ven-001");
    }

    #[test]
    fn display_and_from_str_roundtrip() {
        let id = VenueId::from_seq(7);
        let parsed: VenueId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_roundtrip() {
        let id = ParticipantId::from_seq(2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"part-002\"");
        let parsed: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn from_raw_preserves_value() {
        let id = EventId::from_raw("evt-custom");
        assert_eq!(id.as_str(), "evt-custom");
    }
}
