pub mod app_view;
pub mod search_form;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use app_view::{AppView, AppViewProps};
pub use search_form::{SearchForm, SearchFormProps};
pub use weather_display::{WeatherDisplay, WeatherDisplayProps};
