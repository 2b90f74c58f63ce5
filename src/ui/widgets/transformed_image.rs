// SPDX-License-Identifier: MPL-2.0
//! A widget that draws an image under a pan/zoom transform.
//!
//! The transform state lives outside the widget; this only renders it.
//! The image is centered in the available space, scaled by the zoom
//! factor, shifted by the pan offset, and clipped to the widget bounds.

use crate::ui::inspector::image_resource::ArticleImage;
use crate::ui::state::ViewportTransform;
use iced::advanced::image;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::{Element, Length, Point, Radians, Rectangle, Size, Vector};

/// Fills its container with an image positioned by a [`ViewportTransform`].
pub struct TransformedImage {
    handle: image::Handle,
    image_size: Size,
    zoom: f32,
    pan: Vector,
    dragging: bool,
}

impl TransformedImage {
    /// Creates the widget from the live image and the current transform.
    #[must_use]
    pub fn new(image: &ArticleImage, transform: &ViewportTransform) -> Self {
        Self {
            handle: image.handle.clone(),
            image_size: Size::new(image.width as f32, image.height as f32),
            zoom: transform.zoom(),
            pan: transform.pan(),
            dragging: transform.dragging(),
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer> for TransformedImage
where
    Renderer: renderer::Renderer + image::Renderer<Handle = image::Handle>,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let target = drawing_bounds(bounds, self.image_size, self.zoom, self.pan);

        renderer.with_layer(bounds, |renderer| {
            renderer.draw_image(
                image::Image {
                    handle: self.handle.clone(),
                    filter_method: image::FilterMethod::Linear,
                    rotation: Radians(0.0),
                    border_radius: iced::border::Radius::default(),
                    opacity: 1.0,
                    snap: false,
                },
                target,
                bounds,
            );
        });
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Theme, Renderer> From<TransformedImage> for Element<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer + image::Renderer<Handle = image::Handle> + 'a,
{
    fn from(widget: TransformedImage) -> Self {
        Self::new(widget)
    }
}

/// Where the image lands inside the widget: centered, scaled, then panned.
fn drawing_bounds(bounds: Rectangle, image_size: Size, zoom: f32, pan: Vector) -> Rectangle {
    let scaled = Size::new(image_size.width * zoom, image_size.height * zoom);
    let position = Point::new(
        bounds.x + (bounds.width - scaled.width) / 2.0 + pan.x,
        bounds.y + (bounds.height - scaled.height) / 2.0 + pan.y,
    );
    Rectangle::new(position, scaled)
}
