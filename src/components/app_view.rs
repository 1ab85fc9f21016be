use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::weather_display::RESULT_HEIGHT;
use super::{Component, SearchForm, SearchFormProps, WeatherDisplay, WeatherDisplayProps};
use crate::action::Action;
use crate::state::AppState;

pub const BANNER: &str = "Weather";
pub const SUBTITLE: &str = "Know your weather up to date";
pub const CARD_TITLE: &str = " Weather Details ";

/// Borders + form + lookup hint + every result line.
pub const CARD_HEIGHT: u16 = 2 + 1 + 1 + RESULT_HEIGHT;
/// FIGlet title plus subtitle, when there is room for it.
const BANNER_MAX: u16 = 7;
const HELP_BAR: u16 = 1;

/// Rows left for the banner once the card and help bar are placed.
/// The banner only gets a spacer row below it when it is shown at all.
fn banner_height(area_height: u16) -> u16 {
    area_height
        .saturating_sub(CARD_HEIGHT + HELP_BAR + 1)
        .min(BANNER_MAX)
}

/// Props for AppView - the whole state, read-only
pub struct AppViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Root view: heading, the lookup card, key hints
#[derive(Default)]
pub struct AppView {
    form: SearchForm,
    display: WeatherDisplay,
}

impl AppView {
    pub fn new() -> Self {
        Self::default()
    }

    fn form_props<'a>(state: &'a AppState, is_focused: bool) -> SearchFormProps<'a> {
        SearchFormProps {
            value: &state.query,
            is_focused,
            on_change: Action::FormChange,
            on_submit: Action::FormSubmit,
        }
    }
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),   // FIGlet title
        Constraint::Length(1), // Subtitle
    ])
    .split(area);

    if chunks[0].height > 0 {
        let fill = Fill::Linear(LinearGradient::horizontal(
            ArtColor::rgb(100, 180, 255),
            ArtColor::rgb(150, 220, 200),
        ));
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(fill);
        frame.render_widget(ArtBox::new(&renderer, BANNER), chunks[0]);
    }

    let subtitle = Line::from(Span::styled(
        SUBTITLE,
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ))
    .centered();
    frame.render_widget(Paragraph::new(subtitle), chunks[1]);
}

impl Component<Action> for AppView {
    type Props<'a> = AppViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let form_props = Self::form_props(props.state, props.is_focused);
        self.form
            .handle_event(event, form_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let banner_h = banner_height(area.height);
        let chunks = Layout::vertical([
            Constraint::Length(banner_h),                // Banner + subtitle
            Constraint::Length(u16::from(banner_h > 0)), // Spacer
            Constraint::Min(CARD_HEIGHT),                // Card
            Constraint::Length(HELP_BAR),                // Help bar
        ])
        .split(area);

        if banner_h > 0 {
            render_banner(frame, chunks[0]);
        }

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(CARD_TITLE).centered())
            .padding(Padding::horizontal(1));
        let inner = card.inner(chunks[2]);
        frame.render_widget(card, chunks[2]);

        let card_chunks = Layout::vertical([
            Constraint::Length(1), // Form
            Constraint::Length(1), // Lookup hint
            Constraint::Min(0),    // Result
        ])
        .split(inner);

        self.form.render(
            frame,
            card_chunks[0],
            Self::form_props(props.state, props.is_focused),
        );

        if let Some(location) = &props.state.pending {
            let hint = Line::from(Span::styled(
                format!("Looking up {location}..."),
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(hint), card_chunks[1]);
        }

        self.display.render(
            frame,
            card_chunks[2],
            WeatherDisplayProps {
                weather: props.state.weather.as_ref(),
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherResult;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tui_dispatch::testing::*;

    #[test]
    fn test_enter_routes_to_form() {
        let mut view = AppView::new();
        let state = AppState {
            query: "Paris".into(),
            ..Default::default()
        };
        let event = EventKind::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let actions: Vec<_> = view
            .handle_event(
                &event,
                AppViewProps {
                    state: &state,
                    is_focused: true,
                },
            )
            .into_iter()
            .collect();
        actions.assert_first(Action::FormSubmit("Paris".into()));
    }

    #[test]
    fn test_banner_gives_way_to_card() {
        assert_eq!(banner_height(24), BANNER_MAX);
        assert_eq!(banner_height(18), 18 - CARD_HEIGHT - 2);
        assert_eq!(banner_height(CARD_HEIGHT + 2), 0);
        assert_eq!(banner_height(5), 0);
    }

    #[test]
    fn test_render_pending_hint() {
        let mut render = RenderHarness::new(60, 24);
        let mut view = AppView::new();
        let state = AppState {
            pending: Some("Kyiv".into()),
            weather: Some(WeatherResult::default()),
            ..Default::default()
        };

        let output = render.render_to_string_plain(|frame| {
            view.render(
                frame,
                frame.area(),
                AppViewProps {
                    state: &state,
                    is_focused: true,
                },
            );
        });

        assert!(output.contains("Looking up Kyiv..."), "{output}");
        assert!(output.contains("Temp (C)"), "{output}");
    }
}
