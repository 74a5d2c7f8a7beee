mod app;
mod components;
mod message;
mod model;
mod provider;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
