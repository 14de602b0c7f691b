//! Category view: the filtered card grid for the active tab.
//!
//! [`CategoryState`] holds the visible entries and everything that is only
//! meaningful for them: the selected card, the model cursor and which model
//! accordions are open. All of it is rebuilt by [`CategoryState::refresh`]
//! whenever the query or the tab changes.

use std::collections::{BTreeSet, HashMap};

use freetier_catalog::{CatalogKind, EntryRef, TextSurfaceLoader, filter_catalog, resolve_logo};
use freetier_core::style::{ACCENT, FreetierStyle};
use freetier_tui_components::borders::BorderStyle;
use freetier_tui_components::card::Card;
use freetier_tui_components::logo::{LOGO_WIDTH, LogoBadge};
use freetier_tui_components::text::{truncate_to_width, wrap_to_width};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};

/// Cards per page before the first render has measured the viewport.
const DEFAULT_PAGE_CARDS: usize = 4;

/// Shortest card: borders plus the logo row.
const MIN_CARD_HEIGHT: u16 = 3;

/// Visible entries of one catalog plus per-card UI state.
#[derive(Debug, Clone)]
pub struct CategoryState {
    kind: CatalogKind,
    query: String,
    entries: Vec<EntryRef<'static>>,
    selected: usize,
    model_cursor: usize,
    /// Visible entry index → indices of expanded models
    expanded: HashMap<usize, BTreeSet<usize>>,
    first_row: usize,
    page_cards: usize,
}

impl CategoryState {
    pub fn new(kind: CatalogKind, query: &str) -> Self {
        let mut state = Self {
            kind,
            query: String::new(),
            entries: Vec::new(),
            selected: 0,
            model_cursor: 0,
            expanded: HashMap::new(),
            first_row: 0,
            page_cards: DEFAULT_PAGE_CARDS,
        };
        state.refresh(kind, query);
        state
    }

    /// Recompute the visible entries for `kind` and `query`.
    ///
    /// Selection, scroll position and every open accordion are discarded.
    pub fn refresh(&mut self, kind: CatalogKind, query: &str) {
        self.kind = kind;
        self.query = query.to_string();
        self.entries = filter_catalog(kind, query);
        self.selected = 0;
        self.model_cursor = 0;
        self.expanded.clear();
        self.first_row = 0;
        tracing::trace!(kind = %kind, query, matches = self.entries.len(), "refreshed entries");
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn entries(&self) -> &[EntryRef<'static>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<EntryRef<'static>> {
        self.entries.get(self.selected).copied()
    }

    pub fn model_cursor(&self) -> usize {
        self.model_cursor
    }

    /// Number of accordion rows in the selected card.
    pub fn model_count(&self) -> usize {
        match self.selected_entry() {
            Some(EntryRef::Provider(p)) => p.models.len(),
            _ => 0,
        }
    }

    pub fn is_expanded(&self, entry: usize, model: usize) -> bool {
        self.expanded
            .get(&entry)
            .is_some_and(|models| models.contains(&model))
    }

    /// Total number of open accordions across all cards.
    pub fn expanded_count(&self) -> usize {
        self.expanded.values().map(BTreeSet::len).sum()
    }

    fn select(&mut self, index: usize) {
        let index = index.min(self.entries.len().saturating_sub(1));
        if index != self.selected {
            self.selected = index;
            self.model_cursor = 0;
        }
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        self.select(self.selected.saturating_add(self.page_cards));
    }

    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(self.page_cards));
    }

    pub fn model_next(&mut self) {
        let count = self.model_count();
        if count > 0 {
            self.model_cursor = (self.model_cursor + 1).min(count - 1);
        }
    }

    pub fn model_prev(&mut self) {
        self.model_cursor = self.model_cursor.saturating_sub(1);
    }

    /// Toggle the accordion under the model cursor.
    ///
    /// Returns the new expanded state, or `None` if the selected card has no
    /// accordion rows.
    pub fn toggle_model(&mut self) -> Option<bool> {
        if self.model_cursor >= self.model_count() {
            return None;
        }
        let models = self.expanded.entry(self.selected).or_default();
        if models.remove(&self.model_cursor) {
            if models.is_empty() {
                self.expanded.remove(&self.selected);
            }
            Some(false)
        } else {
            models.insert(self.model_cursor);
            Some(true)
        }
    }
}

/// Glyphs used inside cards.
#[derive(Debug, Clone, Copy)]
struct Markers {
    bullet: &'static str,
    collapsed: &'static str,
    expanded: &'static str,
}

impl Markers {
    fn for_border(border: BorderStyle) -> Self {
        match border {
            BorderStyle::Rounded => Self {
                bullet: "•",
                collapsed: "▸",
                expanded: "▾",
            },
            BorderStyle::Ascii => Self {
                bullet: "*",
                collapsed: "+",
                expanded: "-",
            },
        }
    }
}

/// Body lines of one card, below the logo row.
struct CardBody {
    lines: Vec<Line<'static>>,
    /// Line index of the model cursor, for the selected provider card
    cursor_line: Option<usize>,
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        FreetierStyle::dim().add_modifier(Modifier::BOLD),
    ))
}

/// Bulleted, wrapped item. Continuation lines align under the text.
fn push_bulleted(
    lines: &mut Vec<Line<'static>>,
    bullet: &str,
    indent: usize,
    text: &str,
    width: usize,
    style: Style,
) {
    let prefix_width = indent + bullet.chars().count() + 1;
    let wrapped = wrap_to_width(text, width.saturating_sub(prefix_width).max(1));
    for (i, part) in wrapped.into_iter().enumerate() {
        let prefix = if i == 0 {
            format!("{}{} ", " ".repeat(indent), bullet)
        } else {
            " ".repeat(prefix_width)
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, FreetierStyle::muted()),
            Span::styled(part, style),
        ]));
    }
}

fn card_body(
    state: &CategoryState,
    index: usize,
    entry: EntryRef<'static>,
    width: usize,
    markers: Markers,
) -> CardBody {
    let mut lines = Vec::new();
    let mut cursor_line = None;
    let text = FreetierStyle::text();

    match entry {
        EntryRef::Provider(provider) => {
            lines.push(heading("Limits:"));
            for limit in provider.limits {
                push_bulleted(&mut lines, markers.bullet, 0, limit, width, text);
            }
            lines.push(heading("Available Models:"));
            let selected = index == state.selected;
            for (m, model) in provider.models.iter().enumerate() {
                let open = state.is_expanded(index, m);
                let at_cursor = selected && m == state.model_cursor;
                let marker = if open { markers.expanded } else { markers.collapsed };
                let style = if at_cursor {
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    text
                };
                if at_cursor {
                    cursor_line = Some(lines.len());
                }
                let name = truncate_to_width(model.name, width.saturating_sub(2));
                lines.push(Line::from(vec![
                    Span::styled(format!("{marker} "), FreetierStyle::muted()),
                    Span::styled(name, style),
                ]));
                if open {
                    if model.has_limits() {
                        for limit in model.limits {
                            push_bulleted(&mut lines, "·", 2, limit, width, FreetierStyle::dim());
                        }
                    } else {
                        lines.push(Line::from(Span::styled(
                            "    No model-specific limits",
                            FreetierStyle::muted(),
                        )));
                    }
                }
            }
        }
        EntryRef::TrialCredit(trial) => {
            let credits = format!("Credits: {}", trial.credits);
            for part in wrap_to_width(&credits, width) {
                lines.push(Line::from(Span::styled(part, FreetierStyle::success())));
            }
            lines.push(heading("Models:"));
            for model in trial.models {
                push_bulleted(&mut lines, markers.bullet, 0, model, width, text);
            }
        }
        EntryRef::Deployment(deployment) => {
            lines.push(heading("Features:"));
            for feature in deployment.features {
                push_bulleted(&mut lines, markers.bullet, 0, feature, width, text);
            }
        }
    }

    CardBody { lines, cursor_line }
}

/// Card grid widget.
#[derive(Debug, Clone, Copy)]
pub struct CategoryView {
    columns: u16,
    border: BorderStyle,
    filled: bool,
}

impl Default for CategoryView {
    fn default() -> Self {
        Self {
            columns: 1,
            border: BorderStyle::Rounded,
            filled: true,
        }
    }
}

impl CategoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards per grid row, at least one.
    pub fn columns(mut self, columns: u16) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Unfilled cards let the background show through.
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    fn render_empty(area: Rect, buf: &mut Buffer, state: &CategoryState) {
        if area.height == 0 {
            return;
        }
        let message = format!(
            "No {} match \"{}\"",
            state.kind.label(),
            state.query
        );
        let message = truncate_to_width(&message, area.width.saturating_sub(2) as usize);
        buf.set_stringn(
            area.x + 1,
            area.y + area.height / 3,
            message,
            area.width.saturating_sub(2) as usize,
            FreetierStyle::warning(),
        );
        if area.height > 2 {
            buf.set_stringn(
                area.x + 1,
                area.y + area.height / 3 + 1,
                "Press Esc or Ctrl+U to clear the search",
                area.width.saturating_sub(2) as usize,
                FreetierStyle::muted(),
            );
        }
    }

    fn render_card(
        &self,
        rect: Rect,
        buf: &mut Buffer,
        state: &CategoryState,
        index: usize,
        entry: EntryRef<'static>,
        body: &CardBody,
    ) {
        let selected = index == state.selected;
        let card = Card::new()
            .title(entry.name())
            .focused(selected)
            .border(self.border)
            .filled(self.filled);
        let inner = card.inner(rect);
        card.render(rect, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let logo = resolve_logo(entry.name(), entry.logo(), &TextSurfaceLoader);
        let label = logo
            .label()
            .unwrap_or_else(|| freetier_catalog::placeholder_label(entry.name()));
        LogoBadge::new(label).render(Rect::new(inner.x, inner.y, LOGO_WIDTH, 1), buf);
        let link_x = inner.x + LOGO_WIDTH + 1;
        if link_x < inner.right() {
            let room = (inner.right() - link_x) as usize;
            buf.set_stringn(
                link_x,
                inner.y,
                truncate_to_width(entry.link(), room),
                room,
                FreetierStyle::muted().add_modifier(Modifier::UNDERLINED),
            );
        }

        let body_rows = inner.height.saturating_sub(1) as usize;
        // Keep the model cursor on screen in cards taller than the viewport.
        let skip = match body.cursor_line {
            Some(line) if selected && line >= body_rows => line + 1 - body_rows,
            _ => 0,
        };
        for (row, line) in body.lines.iter().skip(skip).take(body_rows).enumerate() {
            buf.set_line(inner.x, inner.y + 1 + row as u16, line, inner.width);
        }
    }
}

impl StatefulWidget for CategoryView {
    type State = CategoryState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width < 8 || area.height < MIN_CARD_HEIGHT {
            return;
        }
        if state.is_empty() {
            Self::render_empty(area, buf, state);
            return;
        }

        let columns = self.columns.min(area.width / 8).max(1);
        let col_width = area.width / columns;
        let inner_width = col_width.saturating_sub(2) as usize;
        let markers = Markers::for_border(self.border);

        let bodies: Vec<CardBody> = state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| card_body(state, i, *entry, inner_width, markers))
            .collect();

        let columns = columns as usize;
        let row_heights: Vec<u16> = bodies
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|b| (b.lines.len() as u16).saturating_add(MIN_CARD_HEIGHT))
                    .max()
                    .unwrap_or(MIN_CARD_HEIGHT)
            })
            .collect();

        // Scroll so the selected card's row is on screen.
        let selected_row = state.selected / columns;
        if selected_row < state.first_row {
            state.first_row = selected_row;
        }
        while state.first_row < selected_row
            && row_heights[state.first_row..=selected_row]
                .iter()
                .map(|h| *h as u32)
                .sum::<u32>()
                > area.height as u32
        {
            state.first_row += 1;
        }
        state.first_row = state.first_row.min(row_heights.len().saturating_sub(1));

        let mut y = area.y;
        let mut visible_rows = 0;
        for (row, height) in row_heights.iter().enumerate().skip(state.first_row) {
            let remaining = area.bottom().saturating_sub(y);
            if remaining < MIN_CARD_HEIGHT {
                break;
            }
            let height = (*height).min(remaining);
            for col in 0..columns {
                let index = row * columns + col;
                let Some(entry) = state.entries.get(index).copied() else {
                    break;
                };
                let x = area.x + col as u16 * col_width;
                let width = if col + 1 == columns {
                    area.right() - x
                } else {
                    col_width
                };
                self.render_card(
                    Rect::new(x, y, width, height),
                    buf,
                    state,
                    index,
                    entry,
                    &bodies[index],
                );
            }
            visible_rows += 1;
            y += height;
        }
        state.page_cards = (visible_rows * columns).max(1);
    }
}
