/// Widgets for the product screen
use iced::widget::{button, column, container, keyed_column, row, scrollable, text, text_input};
use iced::widget::image::Handle;
use iced::{Alignment, Element, Length};
use std::collections::HashMap;

use crate::state::data::ProductId;
use crate::state::screen::{Body, Phase, Screen};
use crate::Message;

pub mod card;

/// Title, search box and refresh controls
pub fn header(screen: &Screen) -> Element<'_, Message> {
    let catalog = screen.catalog();

    let search = text_input("Search Product", screen.query())
        .on_input(Message::SearchChanged)
        .padding(10)
        .width(Length::Fill);

    let clear = button("Clear")
        .on_press_maybe((!screen.query().is_empty()).then_some(Message::ClearSearch))
        .padding(10);

    let phase = screen.phase();

    let refresh_label = if catalog.is_refreshing() {
        "Refreshing..."
    } else {
        "Refresh"
    };
    let refresh = button(refresh_label)
        .on_press_maybe((phase != Phase::Loading).then_some(Message::Refresh))
        .padding(10);

    column![
        text("Products").size(28),
        row![search, clear, refresh].spacing(8).align_y(Alignment::Center),
        text(status_line(screen, phase)).size(12),
    ]
    .spacing(10)
    .into()
}

/// One line under the search box describing the load cycle
fn status_line(screen: &Screen, phase: Phase) -> String {
    let catalog = screen.catalog();
    let counts = format!(
        "Showing {} of {}",
        screen.visible().len(),
        catalog.snapshot().len()
    );
    let updated = catalog
        .loaded_at()
        .map(|at| format!(" · Updated {}", at.format("%H:%M:%S")))
        .unwrap_or_default();

    match phase {
        Phase::Init => "Waiting to load".to_string(),
        Phase::Loading => format!("{} · Loading...", counts),
        Phase::Ready => format!("{}{}", counts, updated),
        Phase::Error => format!("{}{} · Last update failed", counts, updated),
    }
}

/// Whatever sits under the header: spinner, list, or a message
pub fn body<'a>(
    screen: &'a Screen,
    thumbnails: &'a HashMap<ProductId, Handle>,
    thumbnail_size: u32,
) -> Element<'a, Message> {
    match screen.body() {
        Body::Loading => centered(text("Loading products...").size(18)),
        Body::Failed(err) => centered(text(format!("Error: {}", err)).style(text::danger)),
        Body::NoProducts => centered(text("No products found")),
        Body::Products(products) => {
            let cards = keyed_column(products.into_iter().map(|product| {
                (
                    product.id,
                    card::product_card(product, thumbnails.get(&product.id), thumbnail_size),
                )
            }))
            .spacing(10);

            let list = scrollable(cards).height(Length::Fill);

            // The retained list stays usable when a refresh failed
            match screen.catalog().error() {
                Some(err) => column![text(format!("Error: {}", err)).style(text::danger), list]
                    .spacing(10)
                    .into(),
                None => list.into(),
            }
        }
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
