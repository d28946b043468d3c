//! Events from users or devices
//!
//! The raw wire shape carries both `device_id` and `user_id` as optional
//! fields. [`Event::classify`] splits it into the fields every event shares
//! (a product) and a [`EventSource`] saying who produced it (a sum), so
//! "both ids" and "no id" are unrepresentable downstream.

use modelkit_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ids::{DeviceId, UserId};

/// An event as received, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    /// Set for device-originated events.
    pub device_id: Option<String>,
    /// Set for user-originated events.
    pub user_id: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub timestamp: u64,
    /// Opaque event body.
    #[serde(default)]
    pub payload: String,
}

/// An event produced by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserEvent {
    /// Who produced the event.
    pub user_id: UserId,
}

/// An event produced by a device.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceEvent {
    /// Which device produced the event.
    pub device_id: DeviceId,
}

/// Who produced an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EventSource {
    /// A user.
    User(UserEvent),
    /// A device.
    Device(DeviceEvent),
}

impl EventSource {
    /// The source kind, `"user"` or `"device"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Device(_) => "device",
        }
    }

    /// The producer's identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::User(event) => event.user_id.as_str(),
            Self::Device(event) => event.device_id.as_str(),
        }
    }
}

/// The raw id that was present, before validation.
enum Claimed {
    Device(String),
    User(String),
}

impl Classify for EventSource {
    type Raw = (Option<String>, Option<String>);

    /// Classifies a `(device_id, user_id)` pair.
    ///
    /// Any populated id counts as evidence, valid or not. The single id that
    /// was present is then validated.
    fn classify((device_id, user_id): Self::Raw) -> Result<Self, ClassificationFailure> {
        let claimed = exactly_one([
            ("device_id", device_id.map(Claimed::Device)),
            ("user_id", user_id.map(Claimed::User)),
        ])?;

        match claimed {
            Claimed::Device(id) => DeviceId::new(id)
                .map(|device_id| Self::Device(DeviceEvent { device_id }))
                .map_err(|failure| ClassificationFailure::invalid_evidence("device_id", failure)),
            Claimed::User(id) => UserId::new(id)
                .map(|user_id| Self::User(UserEvent { user_id }))
                .map_err(|failure| ClassificationFailure::invalid_evidence("user_id", failure)),
        }
    }
}

/// A classified event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Opaque event body.
    pub payload: String,
    /// Who produced the event.
    pub source: EventSource,
}

impl Classify for Event {
    type Raw = RawEvent;

    fn classify(raw: RawEvent) -> Result<Self, ClassificationFailure> {
        let RawEvent {
            device_id,
            user_id,
            timestamp,
            payload,
        } = raw;
        let source = EventSource::classify((device_id, user_id)).inspect_err(|err| {
            tracing::warn!(%err, timestamp, "event rejected");
        })?;
        tracing::trace!(kind = source.kind(), id = source.id(), "event classified");
        Ok(Self {
            timestamp,
            payload,
            source,
        })
    }
}
