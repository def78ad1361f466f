//! The window application: one event loop, three screens.

use std::time::{Duration, Instant};

use eframe::egui::{self, Color32, Key, Pos2, Rect};

use crate::core::GameRng;
use crate::games::rps::{Choice, RpsSession};
use crate::games::tictactoe::TicTacToeSession;

use super::draw;
use super::geometry::{cell_at, SURFACE_SIZE};

/// How long a finished round stays on screen before the menu returns.
pub const RESULT_HOLD: Duration = Duration::from_secs(2);

/// Open the game window and run until it is closed.
///
/// Blocks the calling thread for the lifetime of the window. A close event
/// ends the event loop and with it every screen; quit never falls back to
/// the menu.
pub fn run() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game Selector")
            .with_inner_size([SURFACE_SIZE, SURFACE_SIZE])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Game Selector",
        options,
        Box::new(|_cc| Box::new(ArcadeApp::new(GameRng::from_entropy()))),
    )
}

/// The active screen. Whichever engine is on screen owns its round state
/// exclusively; nothing is shared across screens but the RNG.
enum Screen {
    Menu,
    TicTacToe(TicTacToeSession),
    Rps(RpsSession),
}

/// Input decoded from one frame. Decoding is separated from handling so the
/// transition logic is testable without an event loop.
#[derive(Clone, Copy, Debug, Default)]
struct FrameInput {
    click: Option<Pos2>,
    start_tictactoe: bool,
    start_rps: bool,
    throw: Option<Choice>,
}

fn read_input(ctx: &egui::Context) -> FrameInput {
    ctx.input(|i| FrameInput {
        click: i
            .pointer
            .interact_pos()
            .filter(|_| i.pointer.primary_pressed()),
        start_tictactoe: i.key_pressed(Key::Space),
        start_rps: i.key_pressed(Key::Enter),
        throw: if i.key_pressed(Key::Num1) {
            Some(Choice::Rock)
        } else if i.key_pressed(Key::Num2) {
            Some(Choice::Paper)
        } else if i.key_pressed(Key::Num3) {
            Some(Choice::Scissors)
        } else {
            None
        },
    })
}

/// Menu dispatcher plus the two game screens.
pub struct ArcadeApp {
    screen: Screen,
    rng: GameRng,
    /// While set, the finished round stays on screen and input is ignored.
    hold_until: Option<Instant>,
}

impl ArcadeApp {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            screen: Screen::Menu,
            rng,
            hold_until: None,
        }
    }

    /// Advance the dispatcher one frame: expire a result hold, or dispatch
    /// the frame's input to the active screen.
    fn step(&mut self, input: &FrameInput, rect: Rect, now: Instant) {
        if let Some(until) = self.hold_until {
            if now >= until {
                self.screen = Screen::Menu;
                self.hold_until = None;
            }
            return;
        }

        match &mut self.screen {
            Screen::Menu => {
                if input.start_tictactoe {
                    self.screen = Screen::TicTacToe(TicTacToeSession::new());
                } else if input.start_rps {
                    self.screen = Screen::Rps(RpsSession::new());
                }
            }
            Screen::TicTacToe(session) => {
                if let Some(cell) = input.click.and_then(|pos| cell_at(rect, pos)) {
                    session.play(cell, &mut self.rng);
                }
                if session.outcome().is_terminal() {
                    self.hold_until = Some(now + RESULT_HOLD);
                }
            }
            Screen::Rps(session) => {
                if let Some(choice) = input.throw {
                    session.play(choice, &mut self.rng);
                }
                if session.outcome().is_terminal() {
                    self.hold_until = Some(now + RESULT_HOLD);
                }
            }
        }
    }

    fn paint(&self, painter: &egui::Painter, rect: Rect) {
        match &self.screen {
            Screen::Menu => draw::menu(painter, rect),
            Screen::TicTacToe(session) => {
                draw::board(painter, rect, session.board());
                draw::board_result(painter, rect, session.outcome());
            }
            Screen::Rps(session) => {
                draw::rps_prompt(painter, rect);
                if let Some((human, opponent)) = session.throws() {
                    draw::rps_result(painter, rect, human, opponent, session.outcome());
                }
            }
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let input = read_input(ctx);
        let now = Instant::now();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                self.step(&input, rect, now);
                self.paint(ui.painter(), rect);
            });

        // Keep frames coming while a result is held so the hold expires
        // without waiting for the next input event.
        if self.hold_until.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
