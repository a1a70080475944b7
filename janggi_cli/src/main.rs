//! 端末で動作する最小 UI。

use clap::{Parser, ValueEnum};
use janggi_core::ai::types::Ai;
use janggi_core::{ai, engine};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// 対局モード。
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// 人間（赤） vs CPU（青）。
    Alone,
    /// 人間同士。
    Together,
    /// CPU 同士（観戦）。
    Watch,
}

/// Janggi を端末で遊ぶ。
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// 対局モード。
    #[arg(long, value_enum, default_value_t = Mode::Alone)]
    mode: Mode,

    /// CPU の探索深さ（ply）。
    #[arg(long, default_value_t = ai::alphabeta::DEFAULT_DEPTH)]
    depth: u8,

    /// CPU の乱数 seed。
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// CPU が指す前の待ち時間（ミリ秒）。
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// 観戦モードの最大手数。
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// ログの最大レベル。
    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,

    /// ログを JSON 行で出力する。
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug)]
enum Controller {
    Alphabeta(ai::alphabeta::Agent),
    Human,
}

impl Controller {
    fn is_human(&self) -> bool {
        matches!(self, Self::Human)
    }

    fn select_move(&mut self, position: &engine::Position) -> Option<engine::Move> {
        match self {
            Self::Alphabeta(agent) => agent.select_move(position),
            Self::Human => None,
        }
    }
}

/// 人間の1行入力の解釈結果。
#[derive(Debug)]
enum Command {
    Hint(engine::Square),
    Move(engine::Move),
    NewGame,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, engine::ParseMoveError> {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" => return Ok(Command::Quit),
        "new" => return Ok(Command::NewGame),
        _ => {}
    }

    if let Some(rest) = trimmed.strip_prefix("moves") {
        return rest.parse().map(Command::Hint);
    }

    trimmed.parse().map(Command::Move)
}

#[derive(Debug)]
struct App {
    blue: Controller,
    delay: Duration,
    game: engine::Game,
    red: Controller,
}

impl App {
    fn new(args: &Args) -> Self {
        let cpu = |side| Controller::Alphabeta(ai::alphabeta::Agent::new(args.depth, side, args.seed));
        let (red, blue) = match args.mode {
            Mode::Alone => (Controller::Human, cpu(engine::Side::Blue)),
            Mode::Together => (Controller::Human, Controller::Human),
            Mode::Watch => (cpu(engine::Side::Red), cpu(engine::Side::Blue)),
        };
        Self {
            blue,
            delay: Duration::from_millis(args.delay_ms),
            game: engine::Game::initial(),
            red,
        }
    }

    fn controller_for_mut(&mut self, side: engine::Side) -> &mut Controller {
        match side {
            engine::Side::Blue => &mut self.blue,
            engine::Side::Red => &mut self.red,
        }
    }

    fn controller_for(&self, side: engine::Side) -> &Controller {
        match side {
            engine::Side::Blue => &self.blue,
            engine::Side::Red => &self.red,
        }
    }

    fn status_text(&self) -> String {
        let side = self.game.side_to_move();
        match self.game.status() {
            engine::GameStatus::InProgress
                if ai::move_list::list_moves(&self.game.position()).is_empty() =>
            {
                format!("{side} has no legal moves")
            }
            engine::GameStatus::InProgress => {
                format!("move {} | {side} to move", self.game.ply_count().saturating_add(1))
            }
            engine::GameStatus::Won(winner) => format!("Game Over: {winner} wins"),
        }
    }

    /// CPU の手番なら1手指す。指せなければ `false`。
    fn step_ai_once(&mut self) -> bool {
        let side = self.game.side_to_move();
        if self.game.is_game_over() || self.controller_for(side).is_human() {
            return false;
        }

        std::thread::sleep(self.delay);
        let position = self.game.position();
        let Some(mv) = self.controller_for_mut(side).select_move(&position) else {
            tracing::info!(%side, "no legal moves");
            return false;
        };

        match self.game.play(mv) {
            Ok(status) => {
                tracing::info!(%side, %mv, ?status, "cpu move");
                true
            }
            Err(err) => {
                tracing::error!(%side, %mv, %err, "cpu chose an illegal move");
                false
            }
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        write!(out, "{}", self.game.position().board())?;
        if let Some(mv) = self.game.last_move() {
            writeln!(out, "last: {mv}")?;
        }
        writeln!(out, "{}", self.status_text())
    }
}

fn init_logging(args: &Args) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr);
    if args.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run_watch(app: &mut App, max_plies: u32, out: &mut impl Write) -> io::Result<()> {
    app.render(out)?;
    while app.game.ply_count() < max_plies && app.step_ai_once() {
        app.render(out)?;
    }
    if !app.game.is_game_over() {
        writeln!(out, "stopped after {} plies", app.game.ply_count())?;
    }
    Ok(())
}

fn run_interactive(app: &mut App, out: &mut impl Write) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    writeln!(out, "enter moves as `row,col row,col`; `moves row,col`, `new`, `quit`")?;
    app.render(out)?;

    loop {
        if app.step_ai_once() {
            app.render(out)?;
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(()),
            Ok(Command::NewGame) => {
                app.game.reset();
                app.render(out)?;
            }
            Ok(Command::Hint(square)) => {
                let targets: Vec<String> = app
                    .game
                    .legal_moves(square)
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(out, "{square}: [{}]", targets.join(" "))?;
            }
            Ok(Command::Move(mv)) => {
                let side = app.game.side_to_move();
                if !app.controller_for(side).is_human() {
                    writeln!(out, "it is not your turn")?;
                    continue;
                }
                match app.game.play(mv) {
                    Ok(_) => app.render(out)?,
                    Err(err) => writeln!(out, "illegal move: {err}")?,
                }
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    let mut app = App::new(&args);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.mode {
        Mode::Watch => run_watch(&mut app, args.max_plies, &mut out),
        Mode::Alone | Mode::Together => run_interactive(&mut app, &mut out),
    }
}
