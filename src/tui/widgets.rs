//! # UI Widgets Module
//!
//! Drawing for the three screens: the launcher, a grid game and the alphabet
//! flashcards.

use crate::app::{App, AppMode};
use crate::board::Position;
use crate::game_wrapper::GameWrapper;
use crate::games::five_in_row;
use crate::games::language_cards::{Language, LetterCard};
use crate::launcher::CardColor;
use crate::player::Seat;
use crate::tui::games;
use crate::tui::layout::{self, BoardGeometry};
use crate::GridGame;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.size();
    match app.mode {
        AppMode::Home => draw_home(frame, app, area),
        AppMode::InGame => draw_game_view(frame, app, area),
        AppMode::Cards => draw_cards(frame, app, area),
    }
}

fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Primary => Color::Magenta,
        CardColor::Secondary => Color::Cyan,
        CardColor::Accent => Color::Green,
        CardColor::Warning => Color::LightRed,
    }
}

fn draw_home(f: &mut Frame, app: &App, area: Rect) {
    let (title_area, list_area, footer_area) = layout::home_layout(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("🎮 Grid Arcade", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  pick a game"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, title_area);

    let items: Vec<ListItem> = app
        .launcher
        .cards()
        .iter()
        .map(|card| {
            let color = card_color(card.color);
            let mut title = vec![Span::styled(
                format!("{} {}", card.icon, card.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )];
            let opened = app.launcher.selection_count(card.title);
            if opened > 0 {
                title.push(Span::styled(
                    format!("  opened {}x", opened),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(vec![
                Line::from(title),
                Line::from(Span::styled(
                    format!("   {}", card.description),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Games"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.launcher.focus()));
    f.render_stateful_widget(list, list_area, &mut state);

    let mut footer = vec![Span::raw(
        "←/→ move, Enter play, q quit",
    )];
    if let Some(message) = &app.message {
        footer.push(Span::styled(format!("  {}", message), Style::default().fg(Color::Red)));
    }
    let help = Paragraph::new(Line::from(footer))
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(help, footer_area);
}

fn draw_game_view(f: &mut Frame, app: &App, area: Rect) {
    let Some(game) = &app.game else {
        return;
    };
    let (board_area, side_area) = layout::game_layout(area);
    draw_board(f, app, game, board_area);

    let (info_area, history_area, help_area) = layout::side_layout(side_area);
    draw_game_info(f, app, game, info_area);
    draw_move_history(f, app, game, history_area);
    draw_game_help(f, game, help_area);
}

fn draw_board(f: &mut Frame, app: &App, game: &GameWrapper, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(game.name());
    f.render_widget(block, area);

    let geo = BoardGeometry::for_game(game, area);
    let inner = layout::inner(area);
    let board = game.board();
    let winning = game.grid_match().winning_cells();
    let last_move = match game {
        GameWrapper::FiveInRow(g) => g.highlighted_move(),
        _ => None,
    };
    let cell_width = geo.cell_width as usize;

    let mut lines = Vec::new();
    if geo.header_height > 0 {
        lines.push(board_header(app, game, &geo));
    }

    for r in 0..geo.rows {
        let mut spans = Vec::new();
        if geo.label_width > 0 {
            spans.push(Span::styled(
                format!("{:>2} ", r + 1),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for c in 0..geo.cols {
            let pos = Position::new(r, c);
            let is_cursor = (r, c) == app.board_cursor;
            let mut cell = board.get(pos).copied().flatten();
            if let Some(anim) = &app.drop_animation {
                if anim.col == c {
                    if r == anim.row {
                        cell = Some(anim.seat);
                    } else if r == anim.target_row {
                        cell = None;
                    }
                }
            }
            let (symbol, mut style) = match game {
                GameWrapper::TicTacToe(_) => games::tictactoe::get_cell_style(cell, is_cursor),
                GameWrapper::Connect4(_) => games::connect4::get_cell_style(cell, false),
                GameWrapper::FiveInRow(_) => games::five_in_row::get_cell_style(cell, is_cursor),
            };
            if winning.contains(&pos) {
                style = style.bg(Color::Green);
            } else if last_move == Some(pos) {
                style = style.bg(Color::DarkGray);
            } else if is_cursor && cell.is_some() {
                style = style.bg(Color::Yellow);
            }
            spans.push(Span::styled(pad(symbol, cell_width), style));
        }
        lines.push(Line::from(spans));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Column labels: numbers for connect four, letters for five in a row.
fn board_header<'a>(app: &App, game: &GameWrapper, geo: &BoardGeometry) -> Line<'a> {
    let width = geo.cell_width as usize;
    let available = match game {
        GameWrapper::Connect4(g) => g.column_availability(),
        _ => Vec::new(),
    };
    let mut spans = vec![Span::raw(" ".repeat(geo.label_width as usize))];
    for c in 0..geo.cols {
        let span = match game {
            GameWrapper::Connect4(_) => {
                let style = if !available.get(c).copied().unwrap_or(false) {
                    Style::default().fg(Color::DarkGray)
                } else if c == app.board_cursor.1 {
                    Style::default()
                        .fg(games::connect4::seat_color(game.current_seat()))
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                Span::styled(pad(&(c + 1).to_string(), width), style)
            }
            _ => Span::styled(
                pad(&five_in_row::column_label(c).to_string(), width),
                Style::default().fg(Color::DarkGray),
            ),
        };
        spans.push(span);
    }
    Line::from(spans)
}

fn pad(symbol: &str, width: usize) -> String {
    let used = symbol.chars().map(display_width).sum::<usize>();
    format!("{}{}", symbol, " ".repeat(width.saturating_sub(used)))
}

/// Terminal cells taken by a glyph: the coin emoji are double width.
fn display_width(c: char) -> usize {
    if (c as u32) >= 0x1F000 {
        2
    } else {
        1
    }
}

fn draw_game_info(f: &mut Frame, app: &App, game: &GameWrapper, area: Rect) {
    let score = game.grid_match().score();
    let (row, col) = app.board_cursor;

    let status_style = if game.is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut text = vec![
        Line::from(Span::styled(game.status_message(), status_style)),
        Line::from(""),
        Line::from(format!("Time: {}", app.game_time())),
        Line::from(format!("Move: {}", game.move_count())),
        Line::from(format!(
            "Score  {}: {}  {}: {}  Draws: {}",
            game.seat_name(Seat::First),
            score.first,
            game.seat_name(Seat::Second),
            score.second,
            score.draws
        )),
        Line::from(""),
    ];

    match game {
        GameWrapper::Connect4(g) => {
            text.push(Line::from(g.drop_label(col)));
            text.push(Line::from(format!(
                "Column numbers: {}  Animation: {}",
                on_off(g.options.show_column_numbers),
                on_off(g.options.animate_drops)
            )));
        }
        GameWrapper::FiveInRow(g) => {
            text.push(Line::from(game.cell_label(Position::new(row, col))));
            text.push(Line::from(format!(
                "Coordinates: {}  Last move: {}",
                on_off(g.options.show_coordinates),
                on_off(g.options.highlight_last_move)
            )));
        }
        GameWrapper::TicTacToe(_) => {
            text.push(Line::from(game.cell_label(Position::new(row, col))));
        }
    }

    if let Some(message) = &app.message {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Game Info"));
    f.render_widget(paragraph, area);
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn draw_move_history(f: &mut Frame, app: &App, game: &GameWrapper, area: Rect) {
    let items: Vec<ListItem> = game
        .grid_match()
        .history()
        .iter()
        .enumerate()
        .skip(app.history_scroll as usize)
        .map(|(i, record)| {
            ListItem::new(format!(
                "{}. {}: {}",
                i + 1,
                game.seat_name(record.seat),
                game.describe_move(record)
            ))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Move History"));
    f.render_widget(list, area);
}

fn draw_game_help(f: &mut Frame, game: &GameWrapper, area: Rect) {
    let specific = match game {
        GameWrapper::TicTacToe(_) => "",
        GameWrapper::Connect4(_) => "1-7 drop, n numbers, a animation, ",
        GameWrapper::FiveInRow(_) => "c coordinates, l last move, ",
    };
    let undo_style = if game.grid_match().can_undo() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let help = Paragraph::new(Line::from(vec![
        Span::raw(format!("Arrows move, Enter/Space place, {}", specific)),
        Span::styled("u undo", undo_style),
        Span::raw(", r reset, Esc home, q quit"),
    ]))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(help, area);
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let (header_area, deck_areas, footer_area) = layout::cards_layout(area);
    let (focus_language, focus_index) = app.cards.focus();

    let stats = app.cards.deck(focus_language).stats();
    let mut summary = format!("{}: {} letters", focus_language.name(), stats.total);
    if let Some(v) = stats.vowels {
        summary.push_str(&format!(", {} vowels", v));
    }
    if let Some(c) = stats.consonants {
        summary.push_str(&format!(", {} consonants", c));
    }
    if let Some(s) = stats.signs {
        summary.push_str(&format!(", {} signs", s));
    }
    let header = Paragraph::new(summary)
        .block(Block::default().borders(Borders::ALL).title("🔤 Language Cards"));
    f.render_widget(header, header_area);

    let card_width = if app.cards.show_phonetics {
        layout::CARD_WIDTH_WITH_PHONETICS
    } else {
        layout::CARD_WIDTH
    };

    for ((language, deck), deck_area) in Language::ALL
        .into_iter()
        .zip(app.cards.decks())
        .zip(deck_areas)
    {
        let per_line = layout::cards_per_line(deck_area, card_width);
        let lines: Vec<Line> = deck
            .cards()
            .chunks(per_line)
            .enumerate()
            .map(|(line_no, chunk)| {
                let spans: Vec<Span> = chunk
                    .iter()
                    .enumerate()
                    .map(|(i, card)| {
                        let focused =
                            language == focus_language && line_no * per_line + i == focus_index;
                        card_span(card, app.cards.show_phonetics, card_width, focused)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = if deck.is_in_original_order() {
            language.name().to_string()
        } else {
            format!("{} (shuffled)", language.name())
        };
        let mut block = Block::default().borders(Borders::ALL).title(title);
        if language == focus_language {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }
        f.render_widget(Paragraph::new(lines).block(block), deck_area);
    }

    let focused_label = app
        .cards
        .deck(focus_language)
        .cards()
        .get(focus_index)
        .map(LetterCard::label)
        .unwrap_or_default();
    let mut footer = vec![Line::from(focused_label)];
    if let Some(feedback) = app.cards.feedback() {
        footer.push(Line::from(Span::styled(
            format!("🔊 {}", feedback),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    let help = Paragraph::new(footer).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter say, s shuffle, r reset, p phonetics, Tab language, Esc home"),
    );
    f.render_widget(help, footer_area);
}

fn card_span<'a>(card: &LetterCard, show_phonetics: bool, width: u16, focused: bool) -> Span<'a> {
    let text = match (show_phonetics, card.phonetic) {
        (true, Some(p)) => format!("{} {}", card.letter, p),
        _ => format!("[{}]", card.letter),
    };
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default()
    };
    Span::styled(pad(&text, width as usize), style)
}
