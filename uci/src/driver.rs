/*
  Raptor, a UCI-compatible chess engine.
  Copyright (C) 2022 The Raptor Authors (see AUTHORS.md file)

  Raptor is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Raptor is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The UCI read-eval-respond loop: the one place in this workspace that
//! reads stdin, writes stdout, and knows what a GUI expects back.

use std::{
    io::{BufRead, Write},
    time::{Duration, Instant},
};

use raptor_base::{Color, Position, STARTING_FEN};
use raptor_engine::{search, SearchConfig, TTable};

use crate::{
    command::{GoOption, UciCommand},
    message::{EngineInfo, OptionType, UciMessage},
    parse::parse_line,
};

const ENGINE_NAME: &str = "Raptor";
const ENGINE_AUTHOR: &str = "The Raptor Authors";

const DEFAULT_HASH_MB: usize = 16;
const MIN_HASH_MB: usize = 1;
const MAX_HASH_MB: usize = 4096;

/// Write a stderr diagnostic, but only when `debug on` is in effect. The
/// wire format is stdout; anything not addressed to the GUI has to go
/// somewhere else, and UCI's own `debug` switch is what gates it.
fn debug_info(on: bool, msg: &str) {
    if on {
        eprintln!("info string {msg}");
    }
}

/// Owns the engine-side state across a UCI session: the current position,
/// the transposition table, and the debug flag. One instance lives for the
/// whole process; `ucinewgame` and `position` mutate it in place rather than
/// rebuilding it, so the table survives across positions within a game.
pub struct Driver {
    pos: Position,
    tt: TTable,
    hash_mb: usize,
    debug: bool,
}

impl Driver {
    #[must_use]
    pub fn new() -> Driver {
        Driver {
            pos: Position::from_fen(STARTING_FEN).expect("STARTING_FEN must always parse"),
            tt: TTable::with_size_mb(DEFAULT_HASH_MB),
            hash_mb: DEFAULT_HASH_MB,
            debug: false,
        }
    }

    /// Read commands from `input` until `quit` or end of stream, writing
    /// responses to `output`. Returns the process exit code: 0 on a clean
    /// `quit` or end of input, nonzero if a line could not be read at all.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> i32 {
        for line in input.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("info string fatal error reading stdin: {e}");
                    return 1;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line) {
                Ok(UciCommand::Quit) => return 0,
                Ok(cmd) => self.handle(cmd, &mut output),
                Err(e) => debug_info(self.debug, &format!("ignoring line `{line}`: {e}")),
            }
            let _ = output.flush();
        }
        0
    }

    fn handle<W: Write>(&mut self, cmd: UciCommand, out: &mut W) {
        match cmd {
            UciCommand::Uci => {
                writeln!(out, "{}", UciMessage::Id { name: ENGINE_NAME, author: ENGINE_AUTHOR }).ok();
                writeln!(
                    out,
                    "{}",
                    UciMessage::Option { name: "Hash", opt: OptionType::Spin { default: DEFAULT_HASH_MB as i64, min: MIN_HASH_MB as i64, max: MAX_HASH_MB as i64 } }
                )
                .ok();
                writeln!(out, "{}", UciMessage::UciOk).ok();
            }
            UciCommand::Debug(on) => self.debug = on,
            UciCommand::IsReady => {
                writeln!(out, "{}", UciMessage::ReadyOk).ok();
            }
            UciCommand::SetOption { name, value } => self.set_option(&name, value.as_deref()),
            UciCommand::NewGame => {
                self.pos = Position::from_fen(STARTING_FEN).expect("STARTING_FEN must always parse");
                self.tt.clear();
            }
            UciCommand::Position { fen, moves } => self.set_position(fen.as_deref(), &moves),
            UciCommand::Go(opts) => self.go(&opts, out),
            // there is no worker thread to interrupt: `go` always runs to
            // its own deadline before `handle` returns, so a `stop` that
            // arrives afterward has nothing left to stop
            UciCommand::Stop => {}
            UciCommand::Quit => unreachable!("handled by the caller before dispatch"),
        }
    }

    fn set_option(&mut self, name: &str, value: Option<&str>) {
        if !name.eq_ignore_ascii_case("hash") {
            debug_info(self.debug, &format!("ignoring unknown option `{name}`"));
            return;
        }
        let Some(value) = value else {
            return;
        };
        match value.parse::<usize>() {
            Ok(mb) => {
                self.hash_mb = mb.clamp(MIN_HASH_MB, MAX_HASH_MB);
                self.tt = TTable::with_size_mb(self.hash_mb);
            }
            Err(_) => debug_info(self.debug, &format!("ignoring malformed Hash value `{value}`")),
        }
    }

    fn set_position(&mut self, fen: Option<&str>, moves: &[String]) {
        let fen = fen.unwrap_or(STARTING_FEN);
        let mut pos = match Position::from_fen(fen) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("info string malformed FEN `{fen}`: {e}");
                return;
            }
        };
        for uci_move in moves {
            match pos.move_from_uci(uci_move) {
                Ok(m) => pos.make_move(m),
                Err(e) => {
                    eprintln!("info string illegal move `{uci_move}` ignored: {e}");
                    break;
                }
            }
        }
        self.pos = pos;
    }

    fn go<W: Write>(&mut self, opts: &[GoOption], out: &mut W) {
        let config = search_config(opts, self.hash_mb);
        let deadline = search_deadline(opts, self.pos.side_to_move());

        let start = Instant::now();
        self.tt.age_up();
        match search(&mut self.pos, &config, &mut self.tt, deadline) {
            Ok(info) => {
                let elapsed = start.elapsed();
                let nps = if elapsed.as_millis() == 0 { info.nodes } else { info.nodes * 1000 / elapsed.as_millis() as u64 };
                let fields = [
                    EngineInfo::Depth(info.depth),
                    EngineInfo::Score(info.score),
                    EngineInfo::Nodes(info.nodes),
                    EngineInfo::NodeSpeed(nps),
                    EngineInfo::Time(elapsed),
                    EngineInfo::HashFull(self.tt.fill_rate_permill()),
                    EngineInfo::Pv(&info.pv),
                ];
                writeln!(out, "{}", UciMessage::Info(&fields)).ok();
                writeln!(out, "{}", UciMessage::BestMove(info.best_move)).ok();
            }
            Err(e) => eprintln!("info string search failed: {e}"),
        }
    }
}

impl Default for Driver {
    fn default() -> Driver {
        Driver::new()
    }
}

/// Turn the `go` options the GUI sent into the tunables `search` expects.
/// `tt_size_mb` always reflects whatever `setoption name Hash` last set,
/// independent of this particular `go`.
fn search_config(opts: &[GoOption], hash_mb: usize) -> SearchConfig {
    let mut config = SearchConfig { tt_size_mb: hash_mb, ..SearchConfig::default() };
    for opt in opts {
        if let GoOption::Depth(d) = opt {
            config.max_depth = *d;
        }
    }
    config
}

/// Turn clock- or move-time-derived `go` options into a wall-clock deadline.
/// `go infinite` (or a bare `go` with none of the timed options) searches
/// until `config.max_depth` is exhausted, which is high enough to be
/// effectively unbounded.
fn search_deadline(opts: &[GoOption], stm: Color) -> Instant {
    let now = Instant::now();

    if opts.iter().any(|o| matches!(o, GoOption::Infinite)) {
        return now + Duration::from_secs(3600);
    }
    if let Some(GoOption::MoveTime(ms)) = opts.iter().find(|o| matches!(o, GoOption::MoveTime(_))) {
        return now + Duration::from_millis(u64::from(*ms));
    }

    let mut remaining = None;
    let mut increment = 0u32;
    for opt in opts {
        match (stm, opt) {
            (Color::White, GoOption::WhiteTime(t)) | (Color::Black, GoOption::BlackTime(t)) => remaining = Some(*t),
            (Color::White, GoOption::WhiteInc(i)) | (Color::Black, GoOption::BlackInc(i)) => increment = *i,
            _ => {}
        }
    }

    match remaining {
        Some(remaining) => now + Duration::from_millis(u64::from(raptor_engine::time::allocate_millis(remaining, increment))),
        // no clock information at all: give the search a generous but finite
        // slice rather than letting `max_depth` run unbounded
        None => now + Duration::from_secs(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn run(lines: &str) -> String {
        let mut driver = Driver::new();
        let mut out = Vec::new();
        driver.run(BufReader::new(lines.as_bytes()), &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn uci_handshake() {
        let out = run("uci\n");
        assert!(out.contains("id name Raptor"));
        assert!(out.contains("uciok"));
    }

    #[test]
    fn isready_replies_readyok() {
        assert!(run("isready\n").contains("readyok"));
    }

    #[test]
    fn go_on_starting_position_returns_a_legal_move() {
        let out = run("position startpos\ngo depth 2\n");
        assert!(out.contains("bestmove"));
    }

    #[test]
    fn position_then_go_follows_the_given_moves() {
        let out = run("position startpos moves e2e4 e7e5\ngo depth 2\n");
        assert!(out.contains("bestmove"));
    }

    #[test]
    fn go_finds_the_mating_move() {
        let out = run("position fen 7k/1R6/8/8/8/8/8/R5K1 w - - 0 1\ngo depth 3\n");
        assert!(out.contains("bestmove a1a8"));
    }

    #[test]
    fn malformed_fen_leaves_position_unchanged() {
        let out = run("position fen not-a-fen\ngo depth 1\n");
        // falls back to whatever position was already loaded (the default
        // starting position) rather than crashing the driver
        assert!(out.contains("bestmove"));
    }

    #[test]
    fn setoption_hash_resizes_the_table() {
        let mut driver = Driver::new();
        let mut out = Vec::new();
        driver.run(BufReader::new("setoption name Hash value 1\n".as_bytes()), &mut out);
        assert_eq!(driver.hash_mb, 1);
    }
}
