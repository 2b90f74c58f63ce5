// SPDX-License-Identifier: MPL-2.0
//! Result inspector: detail fetching, article paging, the scanned-image
//! lifecycle, and the pan/zoom overlay for one selected search record.

pub mod article_navigator;
pub mod component;
pub mod detail_fetch;
pub mod image_resource;
pub mod view;

pub use article_navigator::{ArticleNavigator, NavigationInfo};
pub use component::{Effect, Message, State};
pub use detail_fetch::{DetailFetch, DetailState};
pub use image_resource::{ArticleImage, ImageResource, ImageState};
