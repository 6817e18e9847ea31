use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::column;
use iced::widget::image::Handle;
use iced::{Element, Length, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod error;
mod state;
mod ui;

use catalog::{thumbnail, CatalogClient};
use config::Config;
use error::FetchError;
use state::catalog::LoadTicket;
use state::data::{ProductId, Snapshot};
use state::screen::Screen;

/// Main application state
struct ProductCatalog {
    /// Snapshot, fetch status and search query
    screen: Screen,
    /// HTTP client for the catalog endpoint
    client: CatalogClient,
    /// Decoded card images for the current snapshot, keyed by product
    thumbnails: HashMap<ProductId, Handle>,
    config: Config,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User typed in the search box
    SearchChanged(String),
    /// Clear button or Escape
    ClearSearch,
    /// Refresh button, F5 or Ctrl+R
    Refresh,
    /// Background fetch finished
    CatalogLoaded(LoadTicket, Result<Snapshot, FetchError>),
    /// One card image finished downloading
    ThumbnailLoaded(LoadTicket, ProductId, Result<Handle, FetchError>),
}

impl ProductCatalog {
    /// Create the application and start the first fetch
    fn new(config: Config) -> (Self, Task<Message>) {
        let client = CatalogClient::new(config.endpoint.clone());
        info!("🛒 Product catalog starting against {}", client.endpoint());

        let mut app = ProductCatalog {
            screen: Screen::new(),
            client,
            thumbnails: HashMap::new(),
            config,
        };

        let task = match app.screen.mount() {
            Some(ticket) => app.fetch(ticket),
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchChanged(query) => {
                self.screen.set_query(query);
                Task::none()
            }
            Message::ClearSearch => {
                self.screen.set_query(String::new());
                Task::none()
            }
            Message::Refresh => match self.screen.refresh() {
                Some(ticket) => self.fetch(ticket),
                None => Task::none(),
            },
            Message::CatalogLoaded(ticket, result) => {
                let replaced = result.is_ok();
                if !self.screen.loaded(ticket, result) || !replaced {
                    return Task::none();
                }

                // New snapshot: images from the old one no longer apply
                self.thumbnails.clear();
                self.fetch_thumbnails(ticket)
            }
            Message::ThumbnailLoaded(ticket, id, result) => {
                if !self.screen.catalog().is_current(ticket) {
                    debug!("Dropping thumbnail {} from an old snapshot", id);
                    return Task::none();
                }

                match result {
                    Ok(handle) => {
                        self.thumbnails.insert(id, handle);
                    }
                    Err(err) => warn!("⚠️  Image for product {} unavailable: {}", id, err),
                }

                Task::none()
            }
        }
    }

    /// Start the catalog request for `ticket`
    fn fetch(&self, ticket: LoadTicket) -> Task<Message> {
        let client = self.client.clone();

        Task::perform(async move { client.load().await }, move |result| {
            Message::CatalogLoaded(ticket, result)
        })
    }

    /// Images to download for the snapshot on screen
    fn thumbnail_requests(&self) -> Vec<(ProductId, String)> {
        if !self.config.load_images {
            return Vec::new();
        }

        thumbnail::thumbnail_requests(self.screen.catalog().snapshot())
    }

    /// One download per product that has an image
    fn fetch_thumbnails(&self, ticket: LoadTicket) -> Task<Message> {
        let size = self.config.thumbnail_size;
        let tasks = self.thumbnail_requests().into_iter().map(|(id, url)| {
            Task::perform(
                thumbnail::fetch_thumbnail(self.client.http().clone(), url, size),
                move |result| Message::ThumbnailLoaded(ticket, id, result),
            )
        });

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        column![
            ui::header(&self.screen),
            ui::body(&self.screen, &self.thumbnails, self.config.thumbnail_size),
        ]
        .spacing(16)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(shortcut)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        if self.config.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Keyboard shortcuts: F5 / Ctrl+R refresh, Escape clears the search
fn shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::F5) => Some(Message::Refresh),
        Key::Named(key::Named::Escape) => Some(Message::ClearSearch),
        Key::Character("r") if modifiers.command() => Some(Message::Refresh),
        _ => None,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();

    iced::application("Products", ProductCatalog::update, ProductCatalog::view)
        .subscription(ProductCatalog::subscription)
        .theme(ProductCatalog::theme)
        .window_size(Size::new(420.0, 780.0))
        .centered()
        .run_with(move || ProductCatalog::new(config))
}
