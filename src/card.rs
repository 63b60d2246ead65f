use crate::config::ViewerConfig;
use crate::profile::Profile;
use ratatui::prelude::*;
use ratatui::widgets::*;
use url::Url;

/// Display model of a single profile. Built fresh on every draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub key: String,
    pub avatar_url: String,
    pub avatar_fallback: bool,
    pub display_name: String,
    pub badge: Option<String>,
    pub handle: String,
    pub link: String,
    pub privacy: &'static str,
}

impl Card {
    pub fn new(user: &Profile, config: &ViewerConfig) -> Self {
        let (avatar_url, avatar_fallback) = match usable_image_url(&user.profile_pic_url) {
            Some(url) => (url, false),
            None => (config.default_avatar.clone(), true),
        };
        Self {
            key: user.id.clone(),
            avatar_url,
            avatar_fallback,
            display_name: user.full_name.clone(),
            badge: user.is_verified.then(|| config.verified_badge.clone()),
            handle: format!("@{}", user.username),
            link: format!("{}{}", config.profile_base_url, user.username),
            privacy: config.locale.privacy_label(user.is_private),
        }
    }

    pub fn title(&self) -> String {
        match &self.badge {
            Some(badge) => format!("{} {badge}", self.display_name),
            None => self.display_name.clone(),
        }
    }

    pub fn text_lines(&self) -> Vec<String> {
        vec![
            self.title(),
            self.handle.clone(),
            self.link.clone(),
            self.privacy.to_string(),
        ]
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut title = vec![Span::styled(
            self.display_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(badge) = &self.badge {
            title.push(Span::raw(" "));
            title.push(Span::styled(badge.clone(), Style::default().fg(Color::Cyan)));
        }
        let avatar_style = if self.avatar_fallback {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(
                self.handle.clone(),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                self.link.clone(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(self.privacy),
            Line::from(Span::styled(self.avatar_url.clone(), avatar_style)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::bordered()),
            area,
        );
    }
}

/// Returns the URL when it is an absolute http(s) URL, `None` otherwise.
pub fn usable_image_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            Some(trimmed.to_string())
        }
        _ => None,
    }
}
