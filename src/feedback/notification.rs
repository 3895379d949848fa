// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the [`Notification`] entity held by the store, the
//! partial [`NotificationSpec`] producers hand to it, and the [`Kind`] and
//! [`Anchor`] enums that drive defaults and placement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Identifiers grow monotonically within a store and are never reused, so a
/// stale id can never address a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned when parsing a [`Kind`] or [`Anchor`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub expected: &'static str,
    pub found: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.expected, self.found)
    }
}

impl std::error::Error for UnknownVariant {}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the colour as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Kind of feedback; determines default duration, title and accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (yellow).
    Warning,
    /// Neutral information (blue).
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }

    /// Returns the title applied by the kind-specific constructors.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Kind::Success => "Success",
            Kind::Error => "Error",
            Kind::Warning => "Warning",
            Kind::Info => "Information",
        }
    }

    /// Returns the accent colour used for the icon and progress bar.
    #[must_use]
    pub fn accent(self) -> Rgb {
        match self {
            Kind::Success => Rgb::new(0x22, 0xc5, 0x5e),
            Kind::Error => Rgb::new(0xef, 0x44, 0x44),
            Kind::Warning => Rgb::new(0xea, 0xb3, 0x08),
            Kind::Info => Rgb::new(0x3b, 0x82, 0xf6),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                expected: "kind",
                found: s.to_string(),
            })
    }
}

/// Screen corner (or edge centre) a notification is stacked at.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

/// Vertical screen edge of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// Horizontal alignment of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Where a presentation layer pins the stack for an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub vertical: VerticalEdge,
    pub horizontal: HorizontalAlign,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopCenter => "top-center",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomCenter => "bottom-center",
            Anchor::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn placement(self) -> Placement {
        let (vertical, horizontal) = match self {
            Anchor::TopLeft => (VerticalEdge::Top, HorizontalAlign::Left),
            Anchor::TopCenter => (VerticalEdge::Top, HorizontalAlign::Center),
            Anchor::TopRight => (VerticalEdge::Top, HorizontalAlign::Right),
            Anchor::BottomLeft => (VerticalEdge::Bottom, HorizontalAlign::Left),
            Anchor::BottomCenter => (VerticalEdge::Bottom, HorizontalAlign::Center),
            Anchor::BottomRight => (VerticalEdge::Bottom, HorizontalAlign::Right),
        };
        Placement {
            vertical,
            horizontal,
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                expected: "anchor",
                found: s.to_string(),
            })
    }
}

/// Button shown on a notification.
///
/// Invoking the callback does not dismiss the notification.
#[derive(Clone)]
pub struct Action {
    label: String,
    callback: Rc<dyn Fn()>,
}

impl Action {
    pub fn new(label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Rc::new(callback),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("label", &self.label).finish_non_exhaustive()
    }
}

/// Callback run once when a notification leaves the store.
pub type DismissHook = Box<dyn FnOnce()>;

/// Why a notification left the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// Its auto-dismiss timer elapsed.
    Expired,
    /// It was removed by id.
    Dismissed,
    /// It was the oldest entry when the store overflowed.
    Evicted,
    /// The whole store was cleared.
    Cleared,
}

/// Caller-supplied fields layered over the defaults of a kind constructor.
#[derive(Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub duration_ms: Option<u64>,
    pub anchor: Option<Anchor>,
    pub action: Option<Action>,
    pub on_dismiss: Option<DismissHook>,
}

impl Overrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Keeps the notification until it is dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        self.action = Some(Action::new(label, callback));
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("title", &self.title)
            .field("duration_ms", &self.duration_ms)
            .field("anchor", &self.anchor)
            .field("action", &self.action)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// A notification before the store has assigned its id and timestamp.
///
/// Unset `duration_ms` and `anchor` are filled from the store defaults on
/// insertion.
pub struct NotificationSpec {
    kind: Kind,
    message: String,
    title: Option<String>,
    duration_ms: Option<u64>,
    anchor: Option<Anchor>,
    action: Option<Action>,
    on_dismiss: Option<DismissHook>,
}

impl NotificationSpec {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            duration_ms: None,
            anchor: None,
            action: None,
            on_dismiss: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, callback: impl Fn() + 'static) -> Self {
        self.action = Some(Action::new(label, callback));
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(hook));
        self
    }

    /// Applies caller overrides; every field the caller set wins.
    #[must_use]
    pub fn overlay(mut self, overrides: Overrides) -> Self {
        let Overrides {
            title,
            duration_ms,
            anchor,
            action,
            on_dismiss,
        } = overrides;
        if title.is_some() {
            self.title = title;
        }
        if duration_ms.is_some() {
            self.duration_ms = duration_ms;
        }
        if anchor.is_some() {
            self.anchor = anchor;
        }
        if action.is_some() {
            self.action = action;
        }
        if on_dismiss.is_some() {
            self.on_dismiss = on_dismiss;
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_notification(
        self,
        id: NotificationId,
        created_at: Instant,
        default_duration_ms: u64,
        default_anchor: Anchor,
    ) -> Notification {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            duration_ms: self.duration_ms.unwrap_or(default_duration_ms),
            anchor: self.anchor.unwrap_or(default_anchor),
            action: self.action,
            on_dismiss: self.on_dismiss,
            created_at,
        }
    }
}

impl fmt::Debug for NotificationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSpec")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("title", &self.title)
            .field("duration_ms", &self.duration_ms)
            .field("anchor", &self.anchor)
            .field("action", &self.action)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// An active notification owned by the store.
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: String,
    duration_ms: u64,
    anchor: Anchor,
    action: Option<Action>,
    on_dismiss: Option<DismissHook>,
    created_at: Instant,
}

impl Notification {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Auto-dismiss delay in milliseconds; `0` means persistent.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration_ms == 0
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the instant the notification expires, if it is timed.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        (!self.is_persistent()).then(|| self.created_at + Duration::from_millis(self.duration_ms))
    }

    /// Time left before expiry, saturating at zero.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.expires_at()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fraction of the lifetime still remaining, from `1.0` down to `0.0`.
    ///
    /// Drives the shrinking progress bar of timed toasts. `None` for
    /// persistent notifications.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let remaining = self.remaining(now)?;
        let total = Duration::from_millis(self.duration_ms);
        Some((remaining.as_secs_f64() / total.as_secs_f64()) as f32)
    }

    /// Consumes the notification, handing back its dismiss hook unrun.
    pub(crate) fn into_dismiss_hook(self) -> Option<DismissHook> {
        self.on_dismiss
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("duration_ms", &self.duration_ms)
            .field("anchor", &self.anchor)
            .field("action", &self.action)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .field("created_at", &self.created_at)
            .finish()
    }
}
