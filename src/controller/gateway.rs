// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget remote toggle calls, guarded by video identity.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use log::warn;
use tokio::runtime::Handle;

use crate::media::{MediaItem, Video};
use crate::surface::MediaToggleService;

/// Issues subscribe/like/dislike toggles against the remote service.
///
/// Each call is spawned on the worker runtime and never awaited, retried,
/// or cancelled; the UI learns about the real remote state only through the
/// next metadata refresh.
pub struct RemoteActionGateway {
    service: Arc<dyn MediaToggleService>,
    runtime: Handle,
}

impl RemoteActionGateway {
    pub fn new(service: Arc<dyn MediaToggleService>, runtime: Handle) -> Self {
        Self { service, runtime }
    }

    pub fn toggle_subscription(&self, video: Option<&Video>, subscribed: bool) {
        self.call(video, |service, item| {
            if subscribed {
                service.subscribe(item)
            } else {
                service.unsubscribe(item)
            }
        });
    }

    pub fn set_like(&self, video: Option<&Video>, liked: bool) {
        self.call(video, |service, item| {
            if liked {
                service.set_like(item)
            } else {
                service.remove_like(item)
            }
        });
    }

    pub fn set_dislike(&self, video: Option<&Video>, disliked: bool) {
        self.call(video, |service, item| {
            if disliked {
                service.set_dislike(item)
            } else {
                service.remove_dislike(item)
            }
        });
    }

    /// Precondition: the video's remote identity must be resolved. A missing
    /// identity aborts silently with a log line, never an error.
    fn call<F>(&self, video: Option<&Video>, op: F)
    where
        F: FnOnce(&dyn MediaToggleService, &MediaItem) -> BoxFuture<'static, ()>,
    {
        let Some(item) = video.and_then(|v| v.media_item.as_ref()) else {
            warn!("video isn't initialized yet, cancelling remote call");
            return;
        };

        self.runtime.spawn(op(self.service.as_ref(), item));
    }
}
