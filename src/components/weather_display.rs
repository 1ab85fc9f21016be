use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherResult;

/// Props for WeatherDisplay - read-only view of the last result
pub struct WeatherDisplayProps<'a> {
    pub weather: Option<&'a WeatherResult>,
}

/// Renders a weather result as labeled fields; nothing until there is one
#[derive(Default)]
pub struct WeatherDisplay;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label} : "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::Reset)),
    ])
}

/// Rows taken by a rendered result
pub const RESULT_HEIGHT: u16 = 7;

/// The lines shown for one result, in display order
pub fn result_lines(weather: &WeatherResult) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            weather.location.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        field("Icon", weather.icon.to_string()),
        Line::default(),
        field("Temp (C)", format!("{} °C", weather.temperature_c)),
        field("Temp (F)", format!("{} °F", weather.temperature_f)),
        field("Country", weather.country.to_string()),
        field("Status", weather.description.to_string()),
    ]
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(weather) = props.weather else {
            return;
        };
        frame.render_widget(Paragraph::new(result_lines(weather)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_render_nothing_without_result() {
        let mut render = RenderHarness::new(40, 8);
        let mut component = WeatherDisplay;

        let output = render.render_to_string_plain(|frame| {
            component.render(frame, frame.area(), WeatherDisplayProps { weather: None });
        });

        assert!(output.trim().is_empty(), "expected blank output:\n{output}");
    }

    #[test]
    fn test_result_lines_order() {
        let weather = WeatherResult {
            location: "Lima".into(),
            description: "Sunny".into(),
            ..Default::default()
        };
        let lines = result_lines(&weather);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(lines.len(), RESULT_HEIGHT as usize);
        assert_eq!(text[0], "Lima");
        assert!(text[3].starts_with("Temp (C) : "));
        assert!(text[4].starts_with("Temp (F) : "));
        assert_eq!(text[6], "Status : Sunny");
    }
}
