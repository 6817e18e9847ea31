/// Product card: thumbnail on the left, details on the right
use iced::font::Weight;
use iced::widget::{column, container, image, row, text};
use iced::{Alignment, Element, Font, Length};

use crate::state::data::Product;
use crate::Message;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub fn product_card<'a>(
    product: &'a Product,
    thumbnail: Option<&'a image::Handle>,
    size: u32,
) -> Element<'a, Message> {
    let details = column![
        text(&product.title).font(BOLD).size(16),
        text(format!("Category: {}", product.category)),
        text(format!("Stock available: {}", product.stock)),
        text(format!("Rating: {}", product.rating)),
    ]
    .spacing(4)
    .width(Length::Fill);

    let content = row![picture(thumbnail, size), details]
        .spacing(10)
        .align_y(Alignment::Center);

    container(content)
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

/// The product image, or a grey tile while it is missing.
///
/// Products without images, images still downloading and images that
/// failed to download all end up here with `None`.
fn picture<'a>(thumbnail: Option<&'a image::Handle>, size: u32) -> Element<'a, Message> {
    let side = Length::Fixed(size as f32);

    match thumbnail {
        Some(handle) => image(handle.clone()).width(side).height(side).into(),
        None => container(text("No image").size(12))
            .width(side)
            .height(side)
            .center_x(side)
            .center_y(side)
            .style(container::rounded_box)
            .into(),
    }
}
