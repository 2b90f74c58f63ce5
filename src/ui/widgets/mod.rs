// SPDX-License-Identifier: MPL-2.0
pub mod transformed_image;

pub use transformed_image::TransformedImage;
