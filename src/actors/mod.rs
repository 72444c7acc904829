pub mod search_controller;

pub use search_controller::{
    ClickTarget, InputEdit, SearchController, SearchControllerConfig, SearchControllerMessage,
    SearchWidget,
};
