// SPDX-License-Identifier: MPL-2.0
//! Ownership of the single live article image.
//!
//! The manager is the only place a decoded image handle is installed or
//! released. Callers request a source change and feed finished fetches
//! back in; every exit path (replacement, failure, explicit clear) runs
//! through [`ImageResource::release_live`], so at most one handle is ever
//! live and none leaks past the session.
//!
//! Fetches are generation-tagged like the detail fetch: a binary that
//! arrives for a superseded source is dropped without being decoded.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded article image ready for display.
#[derive(Debug, Clone)]
pub struct ArticleImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Observable state of the image slot.
///
/// `Loading` can coexist with a previous image still being live; the old
/// handle is only released once its replacement has actually arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    /// No source bound; nothing live.
    Idle,
    /// A binary fetch is in flight.
    Loading,
    /// A decoded handle is installed and live.
    Ready,
    /// Fetch or decode failed; nothing live.
    Failed(Error),
}

/// Fetch the caller must issue after a source change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub image_id: String,
    pub generation: u64,
}

/// Exclusive owner of the currently live [`ArticleImage`].
#[derive(Debug, Clone)]
pub struct ImageResource {
    state: ImageState,
    /// Image id of the most recent request; for `Ready`, the live image.
    source: Option<String>,
    live: Option<ArticleImage>,
    generation: u64,
    installs: u64,
    releases: u64,
}

impl Default for ImageResource {
    fn default() -> Self {
        Self {
            state: ImageState::Idle,
            source: None,
            live: None,
            generation: 0,
            installs: 0,
            releases: 0,
        }
    }
}

impl ImageResource {
    /// Binds the slot to a new source.
    ///
    /// `None` releases the live handle immediately and returns to idle.
    /// `Some(id)` transitions to loading and returns the fetch to issue;
    /// re-binding the id that is already live and ready is a no-op.
    pub fn set_source(&mut self, source: Option<String>) -> Option<ImageRequest> {
        let Some(image_id) = source else {
            self.clear();
            return None;
        };

        if self.state == ImageState::Ready && self.source.as_deref() == Some(&image_id) {
            return None;
        }

        self.generation += 1;
        self.source = Some(image_id.clone());
        self.state = ImageState::Loading;

        Some(ImageRequest {
            image_id,
            generation: self.generation,
        })
    }

    /// Applies a finished binary fetch. Returns whether it was accepted;
    /// stale generations are dropped before decoding.
    ///
    /// On success the previous handle is released first, then the new one
    /// installed. On fetch or decode failure the slot holds no handle at
    /// all; a handle released here is never re-installed.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<u8>>) -> bool {
        if generation != self.generation {
            return false;
        }

        match result.and_then(|bytes| decode(&bytes)) {
            Ok(image) => {
                self.release_live();
                self.live = Some(image);
                self.installs += 1;
                self.state = ImageState::Ready;
            }
            Err(error) => {
                self.release_live();
                self.state = ImageState::Failed(error);
            }
        }
        true
    }

    /// Releases any live handle and returns to idle, invalidating fetches
    /// still in flight. Used for teardown and for articles without images.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.release_live();
        self.source = None;
        self.state = ImageState::Idle;
    }

    #[must_use]
    pub fn state(&self) -> &ImageState {
        &self.state
    }

    /// Tag the next applied binary must carry.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == ImageState::Loading
    }

    /// The live image, if one is installed.
    ///
    /// During `Loading` this still returns the previous image, which stays
    /// on screen until the replacement arrives.
    #[must_use]
    pub fn image(&self) -> Option<&ArticleImage> {
        self.live.as_ref()
    }

    /// Number of handles installed over the session.
    #[must_use]
    pub fn installs(&self) -> u64 {
        self.installs
    }

    /// Number of handles released over the session.
    #[must_use]
    pub fn releases(&self) -> u64 {
        self.releases
    }

    // Single release point. Dropping the handle frees the decoded pixels;
    // the counter only moves when a handle actually existed.
    fn release_live(&mut self) {
        if self.live.take().is_some() {
            self.releases += 1;
        }
    }
}

fn decode(bytes: &[u8]) -> Result<ArticleImage> {
    let decoded =
        image_rs::load_from_memory(bytes).map_err(|e| Error::DecodeFailed(e.to_string()))?;

    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();

    Ok(ArticleImage {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}
