//! Painting the screens. Pure output; no input handling, no state.

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke};

use crate::core::Outcome;
use crate::games::rps::Choice;
use crate::games::tictactoe::{Board, Mark};

const GRID_STROKE: f32 = 5.0;

fn font() -> FontId {
    FontId::proportional(40.0)
}

fn text(painter: &Painter, rect: Rect, x: f32, y: f32, s: &str, color: Color32) {
    painter.text(
        rect.min + eframe::egui::vec2(x, y),
        Align2::LEFT_TOP,
        s,
        font(),
        color,
    );
}

/// The two-entry menu.
pub fn menu(painter: &Painter, rect: Rect) {
    text(painter, rect, 20.0, 20.0, "Press SPACE to Play Tic Tac Toe", Color32::BLACK);
    text(
        painter,
        rect,
        20.0,
        100.0,
        "Press ENTER to Play Rock Paper Scissors",
        Color32::BLACK,
    );
}

/// Grid lines and marks.
pub fn board(painter: &Painter, rect: Rect, board: &Board) {
    let cell_w = rect.width() / 3.0;
    let cell_h = rect.height() / 3.0;
    let stroke = Stroke::new(GRID_STROKE, Color32::BLACK);

    for i in 1..3 {
        let y = rect.min.y + i as f32 * cell_h;
        painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        let x = rect.min.x + i as f32 * cell_w;
        painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
    }

    for cell in 0..9 {
        if let Some(mark) = board.cell(cell) {
            let center = Pos2::new(
                rect.min.x + (cell % 3) as f32 * cell_w + cell_w / 2.0,
                rect.min.y + (cell / 3) as f32 * cell_h + cell_h / 2.0,
            );
            let color = match mark {
                Mark::X => Color32::RED,
                Mark::O => Color32::GREEN,
            };
            painter.text(center, Align2::CENTER_CENTER, mark.to_string(), font(), color);
        }
    }
}

/// Outcome banner over a finished board.
pub fn board_result(painter: &Painter, rect: Rect, outcome: Outcome) {
    let label = match outcome {
        Outcome::PlayerWin => "X wins!",
        Outcome::OpponentWin => "O wins!",
        Outcome::Tie => "Tie!",
        Outcome::InProgress => return,
    };
    text(painter, rect, 20.0, 20.0, label, Color32::BLACK);
}

/// Title and the three throw options.
pub fn rps_prompt(painter: &Painter, rect: Rect) {
    text(painter, rect, 20.0, 20.0, "Rock Paper Scissors", Color32::BLACK);
    text(painter, rect, 20.0, 100.0, "Press 1: Rock", Color32::BLUE);
    text(painter, rect, 20.0, 200.0, "Press 2: Paper", Color32::BLUE);
    text(painter, rect, 20.0, 300.0, "Press 3: Scissors", Color32::BLUE);
}

/// Both throws plus the outcome line.
pub fn rps_result(painter: &Painter, rect: Rect, human: Choice, opponent: Choice, outcome: Outcome) {
    text(
        painter,
        rect,
        20.0,
        400.0,
        &format!("You chose: {human}"),
        Color32::BLACK,
    );
    text(
        painter,
        rect,
        20.0,
        450.0,
        &format!("AI chose: {opponent}"),
        Color32::BLACK,
    );
    let label = match outcome {
        Outcome::PlayerWin => "You Win!",
        Outcome::OpponentWin => "You Lose!",
        Outcome::Tie => "It's a Tie!",
        Outcome::InProgress => return,
    };
    text(painter, rect, 20.0, 500.0, label, Color32::BLACK);
}
