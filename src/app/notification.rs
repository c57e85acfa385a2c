// SPDX-License-Identifier: GPL-3.0

use std::time::Duration;

use crate::fl;

/// How long a notification stays on screen
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Danger,
}

/// Transient feedback raised by the controller, displaying it is up to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
}

impl Notification {
    pub fn favorite_added(name: &str) -> Self {
        Self {
            message: fl!("favorite-added", name = name),
            kind: NotificationKind::Success,
            duration: NOTIFICATION_DURATION,
        }
    }

    pub fn favorite_removed(name: &str) -> Self {
        Self {
            message: fl!("favorite-removed", name = name),
            kind: NotificationKind::Danger,
            duration: NOTIFICATION_DURATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_interpolate_the_bare_name() {
        assert_eq!(
            Notification::favorite_added("pikachu").message,
            "pikachu added to favorites"
        );
        assert_eq!(
            Notification::favorite_removed("mew").message,
            "mew removed from favorites"
        );
    }
}
