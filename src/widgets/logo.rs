//! The [`FitNourishLogo`] widget renders the brand mark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Widget;

/// Brand name as written in headers.
pub const BRAND: &str = "FitNourish.AI";

const BANNER: &str = indoc! {"
    ┏━╸╻╺┳╸┏┓╻┏━┓╻ ╻┏━┓╻┏━┓╻ ╻
    ┣╸ ┃ ┃ ┃┗┫┃ ┃┃ ┃┣┳┛┃┗━┓┣━┫
    ╹  ╹ ╹ ╹ ╹┗━┛┗━┛╹┗╸╹┗━┛╹ ╹
"};

/// ```rust
/// use fitnourish::widgets::FitNourishLogo;
///
/// # fn draw(frame: &mut ratatui::Frame) {
/// frame.render_widget(FitNourishLogo::banner(), frame.area());
/// # }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FitNourishLogo {
    size: Size,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// One line: leaf and name
    #[default]
    Small,
    /// Three-line box drawing banner
    Banner,
}

impl FitNourishLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn small() -> Self {
        Self::new(Size::Small)
    }

    pub const fn banner() -> Self {
        Self::new(Size::Banner)
    }

    /// Columns the logo occupies.
    pub fn width(&self) -> u16 {
        match self.size {
            Size::Small => 16,
            Size::Banner => BANNER
                .lines()
                .map(|l| l.chars().count())
                .max()
                .and_then(|w| u16::try_from(w).ok())
                .unwrap_or(0),
        }
    }

    pub fn height(&self) -> u16 {
        match self.size {
            Size::Small => 1,
            Size::Banner => 3,
        }
    }
}

impl Widget for FitNourishLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let text = match self.size {
            Size::Small => Text::from(Line::from(vec![
                Span::styled("🥗 ", t.title_style()),
                Span::styled(BRAND, t.title_style()),
            ])),
            Size::Banner => Text::styled(BANNER, t.title_style()),
        };
        text.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_dimensions() {
        let logo = FitNourishLogo::banner();
        assert_eq!(logo.height(), 3);
        assert_eq!(BANNER.lines().count(), 3);
        assert!(logo.width() > 20);
    }

    #[test]
    fn test_small_renders_brand() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        FitNourishLogo::small().render(area, &mut buf);
        let row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(row.contains("FitNourish.AI"));
    }
}
