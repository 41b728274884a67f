// SPDX-License-Identifier: MPL-2.0
//! Rendering of the select: label, trigger, option list and error line.

use super::option::SelectOption;
use super::state::{Message, State, UpdateContext};
use crate::config::defaults::OPTION_LIST_MAX_HEIGHT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::outside_press;
use iced::widget::{button, container, scrollable, text_input, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Radians, Rotation, Theme};

/// Everything needed to render one select.
///
/// Texts left as `None` fall back to the localized defaults.
#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub options: &'a [SelectOption],
    /// Currently selected value, owned by the caller.
    pub value: Option<&'a str>,
    pub label: Option<&'a str>,
    pub placeholder: Option<&'a str>,
    /// Shown when `options` is empty.
    pub empty_label: Option<&'a str>,
    /// Shown when the search term filters every option out.
    pub no_match_label: Option<&'a str>,
    pub error: Option<&'a str>,
    pub required: bool,
    pub disabled: bool,
    pub searchable: bool,
}

impl<'a> ViewContext<'a> {
    pub fn new(i18n: &'a I18n, state: &'a State, options: &'a [SelectOption]) -> Self {
        Self {
            i18n,
            state,
            options,
            value: None,
            label: None,
            placeholder: None,
            empty_label: None,
            no_match_label: None,
            error: None,
            required: false,
            disabled: false,
            searchable: false,
        }
    }

    #[must_use]
    pub fn value(mut self, value: Option<&'a str>) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    #[must_use]
    pub fn empty_label(mut self, empty_label: &'a str) -> Self {
        self.empty_label = Some(empty_label);
        self
    }

    #[must_use]
    pub fn no_match_label(mut self, no_match_label: &'a str) -> Self {
        self.no_match_label = Some(no_match_label);
        self
    }

    /// Switches the field to its error presentation with this message.
    #[must_use]
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// The subset of this context that `State::update` needs.
    #[must_use]
    pub fn update_context(&self) -> UpdateContext<'a> {
        UpdateContext {
            options: self.options,
            disabled: self.disabled,
            searchable: self.searchable,
        }
    }

    /// Text shown in the trigger: the selected option's label or the placeholder.
    ///
    /// A value that matches no option shows the placeholder.
    #[must_use]
    pub fn display_value(&self) -> DisplayValue {
        let selected = self
            .value
            .and_then(|value| super::option::find(self.options, value));

        match selected {
            Some(option) => DisplayValue::Selected(option.label.clone()),
            None => DisplayValue::Placeholder(
                self.placeholder
                    .map_or_else(|| self.i18n.tr("select-placeholder"), str::to_owned),
            ),
        }
    }

    /// What the open list shows.
    #[must_use]
    pub fn list_content(&self) -> ListContent<'a> {
        if self.options.is_empty() {
            return ListContent::Empty(
                self.empty_label
                    .map_or_else(|| self.i18n.tr("select-empty"), str::to_owned),
            );
        }

        let visible = if self.searchable {
            self.state.visible_options(self.options)
        } else {
            self.options.iter().collect()
        };

        if visible.is_empty() {
            ListContent::NoMatch(
                self.no_match_label
                    .map_or_else(|| self.i18n.tr("select-no-match"), str::to_owned),
            )
        } else {
            ListContent::Options(visible)
        }
    }
}

/// Trigger text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Selected(String),
    Placeholder(String),
}

/// Body of the open option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent<'a> {
    /// The caller supplied no options at all.
    Empty(String),
    /// Options exist but the search term matches none.
    NoMatch(String),
    Options(Vec<&'a SelectOption>),
}

/// Renders the select.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and all fields are references
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut field = Column::new().spacing(spacing::XS).push(build_trigger(&ctx));

    if ctx.state.is_open() && !ctx.disabled {
        field = field.push(build_menu(&ctx));
    }

    // A disabled select listens to nothing, outside presses included.
    let field: Element<'_, Message> = if ctx.disabled {
        field.into()
    } else {
        outside_press(field)
            .on_outside_press(Message::OutsidePressed)
            .on_key_press(Message::KeyPressed)
            .into()
    };

    let mut content = Column::new().spacing(spacing::XXS);
    if let Some(label) = build_label(&ctx) {
        content = content.push(label);
    }
    content = content.push(field);
    if let Some(error) = ctx.error {
        content = content.push(
            Text::new(error.to_owned())
                .size(typography::CAPTION)
                .style(styles::select::danger_text),
        );
    }

    content.width(Length::Fill).into()
}

fn build_label<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let label = ctx.label?;

    let mut row = Row::new()
        .spacing(spacing::XXS)
        .push(Text::new(label.to_owned()).size(typography::BODY));
    if ctx.required {
        row = row.push(
            Text::new(ctx.i18n.tr("select-required-marker"))
                .size(typography::BODY)
                .style(styles::select::danger_text),
        );
    }

    Some(row.into())
}

fn build_trigger<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open = ctx.state.is_open() && !ctx.disabled;

    let display: Element<'a, Message> = match ctx.display_value() {
        DisplayValue::Selected(label) => Text::new(label).size(typography::BODY).into(),
        DisplayValue::Placeholder(placeholder) => Text::new(placeholder)
            .size(typography::BODY)
            .style(styles::select::muted_text)
            .into(),
    };

    let mut chevron = icons::sized(icons::chevron_down(), sizing::ICON_SM).style(
        |theme: &Theme, _status| iced::widget::svg::Style {
            color: Some(ColorScheme::for_theme(theme).text_muted),
        },
    );
    if open {
        chevron = chevron.rotation(Rotation::Floating(Radians::PI));
    }

    let content = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::XS)
        .push(container(display).width(Length::Fill))
        .push(chevron);

    let trigger = button(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::select::trigger(ctx.error.is_some(), open));

    if ctx.disabled {
        trigger.into()
    } else {
        trigger.on_press(Message::TriggerPressed).into()
    }
}

fn build_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(spacing::XXS);

    if ctx.searchable {
        let placeholder = ctx.i18n.tr("select-search-placeholder");
        let search = text_input(&placeholder, ctx.state.search())
            .id(ctx.state.search_input_id().clone())
            .on_input(Message::SearchChanged)
            .size(typography::BODY)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::select::search_input);
        menu = menu.push(
            Row::new()
                .align_y(Vertical::Center)
                .spacing(spacing::XS)
                .push(icons::sized(icons::search(), sizing::ICON_SM))
                .push(search),
        );
    }

    let body: Element<'a, Message> = match ctx.list_content() {
        ListContent::Empty(message) | ListContent::NoMatch(message) => container(
            Text::new(message)
                .size(typography::BODY)
                .style(styles::select::muted_text),
        )
        .padding([spacing::XS, spacing::SM])
        .into(),
        ListContent::Options(options) => {
            let rows = options
                .into_iter()
                .map(|option| build_option(option, ctx.value == Some(option.value.as_str())));
            scrollable(Column::with_children(rows).spacing(spacing::XXS))
                .height(Length::Shrink)
                .into()
        }
    };

    container(menu.push(body))
        .padding(spacing::XXS)
        .width(Length::Fill)
        .max_height(OPTION_LIST_MAX_HEIGHT)
        .style(styles::select::menu)
        .into()
}

fn build_option(option: &SelectOption, selected: bool) -> Element<'_, Message> {
    let mut row = Row::new().align_y(Vertical::Center).spacing(spacing::XS);

    if option.photo.is_some() {
        let initial = option.initial().map(String::from).unwrap_or_default();
        row = row.push(
            container(Text::new(initial).size(typography::CAPTION))
                .width(Length::Fixed(sizing::AVATAR))
                .height(Length::Fixed(sizing::AVATAR))
                .center_x(Length::Fixed(sizing::AVATAR))
                .center_y(Length::Fixed(sizing::AVATAR))
                .style(styles::select::avatar),
        );
    }

    row = row.push(
        Text::new(option.label.as_str())
            .size(typography::BODY)
            .width(Length::Fill),
    );

    if let Some(tag) = &option.tag {
        row = row.push(
            container(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([0.0, spacing::XXS])
                .style(styles::select::tag),
        );
    }

    if selected {
        row = row.push(icons::sized(icons::check(), sizing::ICON_SM));
    } else {
        row = row.push(Space::new().width(Length::Fixed(sizing::ICON_SM)));
    }

    let entry = button(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::select::option(selected));

    if option.disabled {
        entry.into()
    } else {
        entry
            .on_press(Message::OptionPressed(option.value.clone()))
            .into()
    }
}
