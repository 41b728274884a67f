// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that reports pointer presses landing outside its content
//! and forwards key presses no other widget has claimed.
//!
//! The wrapper only listens while it is part of the widget tree: once the
//! owning control is no longer rendered, no handler is left behind.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{keyboard, touch, Element, Event, Length, Rectangle, Size};

/// Wraps content and publishes a message for every press outside of it.
pub struct OutsidePress<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_outside_press: Option<Message>,
    on_key_press: Option<Box<dyn Fn(keyboard::Key) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> OutsidePress<'a, Message, Theme, Renderer> {
    /// Creates a new `OutsidePress` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_outside_press: None,
            on_key_press: None,
        }
    }

    /// Message published when a mouse button or finger goes down outside the content.
    #[must_use]
    pub fn on_outside_press(mut self, message: Message) -> Self {
        self.on_outside_press = Some(message);
        self
    }

    /// Maps key presses to a message.
    ///
    /// Keys already captured by another widget are skipped, except `Escape`.
    #[must_use]
    pub fn on_key_press(mut self, f: impl Fn(keyboard::Key) -> Message + 'a) -> Self {
        self.on_key_press = Some(Box::new(f));
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for OutsidePress<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(message) = &self.on_outside_press {
            if is_press_outside(event, layout.bounds(), cursor) {
                shell.publish(message.clone());
            }
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        if let Some(on_key_press) = &self.on_key_press {
            if let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                if forwards_key(key, shell.is_event_captured()) {
                    shell.publish(on_key_press(key.clone()));
                }
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<OutsidePress<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: OutsidePress<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create an outside-press wrapper.
pub fn outside_press<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> OutsidePress<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    OutsidePress::new(content)
}

/// Whether `event` is a pointer press that lands outside `bounds`.
///
/// A mouse press with no known cursor position counts as outside.
fn is_press_outside(event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> bool {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => !cursor.is_over(bounds),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => !bounds.contains(*position),
        _ => false,
    }
}

/// Whether a key press reaches the owner. A captured key belongs to the
/// widget that captured it; `Escape` always gets through.
fn forwards_key(key: &keyboard::Key, captured: bool) -> bool {
    !captured || matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape))
}
