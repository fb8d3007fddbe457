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

//! Turning one line of UCI text into a [`UciCommand`].
//!
//! Unlike the board-aware parsers this is sometimes modeled on, moves inside
//! a `position` command are kept as plain strings here: validating them
//! against the generator requires replaying them one at a time against a
//! `Position` that is still being built, which is [`crate::driver::Driver`]'s
//! job, not the parser's.

use crate::command::{GoOption, UciCommand};

pub type ParseResult = Result<UciCommand, String>;

/// Parse a single line of UCI input.
pub fn parse_line(line: &str) -> ParseResult {
    let mut tokens = line.split_ascii_whitespace();
    let first = tokens.next().ok_or("empty line")?;
    match first {
        "uci" => Ok(UciCommand::Uci),
        "debug" => match tokens.next() {
            Some("on") => Ok(UciCommand::Debug(true)),
            Some("off") | None => Ok(UciCommand::Debug(false)),
            Some(other) => Err(format!("unrecognized `debug` argument `{other}`")),
        },
        "isready" => Ok(UciCommand::IsReady),
        "setoption" => parse_set_option(&mut tokens),
        "ucinewgame" => Ok(UciCommand::NewGame),
        "position" => parse_position(&mut tokens),
        "go" => parse_go(&mut tokens),
        "stop" => Ok(UciCommand::Stop),
        "quit" => Ok(UciCommand::Quit),
        other => Err(format!("unrecognized UCI command `{other}`")),
    }
}

fn parse_set_option(tokens: &mut dyn Iterator<Item = &str>) -> ParseResult {
    let name_tok = tokens.next().ok_or("reached end of line looking for `name` in `setoption`")?;
    if name_tok != "name" {
        return Err(format!("expected `name` in `setoption`, got `{name_tok}`"));
    }

    let mut name = String::new();
    loop {
        match tokens.next() {
            None => return Ok(UciCommand::SetOption { name, value: None }),
            Some("value") => break,
            Some(tok) => {
                if !name.is_empty() {
                    name.push(' ');
                }
                name.push_str(tok);
            }
        }
    }

    let mut value = String::new();
    for tok in tokens {
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(tok);
    }
    Ok(UciCommand::SetOption { name, value: Some(value) })
}

fn parse_position(tokens: &mut dyn Iterator<Item = &str>) -> ParseResult {
    let mut tokens = tokens.peekable();
    let fen = match tokens.next().ok_or("reached end of line parsing `position`")? {
        "startpos" => None,
        "fen" => {
            let mut fen = String::new();
            while !matches!(tokens.peek(), Some(&"moves") | None) {
                if !fen.is_empty() {
                    fen.push(' ');
                }
                fen.push_str(tokens.next().unwrap());
            }
            Some(fen)
        }
        other => return Err(format!("expected `startpos` or `fen`, got `{other}`")),
    };

    if matches!(tokens.peek(), Some(&"moves")) {
        tokens.next();
    }
    let moves = tokens.map(str::to_string).collect();

    Ok(UciCommand::Position { fen, moves })
}

fn parse_go(tokens: &mut dyn Iterator<Item = &str>) -> ParseResult {
    let mut opts = Vec::new();
    let mut tokens = tokens.peekable();
    while let Some(tok) = tokens.next() {
        opts.push(match tok {
            "wtime" => GoOption::WhiteTime(parse_u32(tokens.next())?),
            "btime" => GoOption::BlackTime(parse_u32(tokens.next())?),
            "winc" => GoOption::WhiteInc(parse_u32(tokens.next())?),
            "binc" => GoOption::BlackInc(parse_u32(tokens.next())?),
            "depth" => GoOption::Depth(parse_u32(tokens.next())? as u8),
            "movetime" => GoOption::MoveTime(parse_u32(tokens.next())?),
            "infinite" => GoOption::Infinite,
            // options this engine does not act on (ponder, movestogo, nodes,
            // mate, searchmoves) are accepted and dropped rather than
            // rejecting the whole `go` command
            "ponder" => continue,
            "movestogo" | "nodes" | "mate" => {
                tokens.next();
                continue;
            }
            "searchmoves" => {
                while matches!(tokens.peek(), Some(t) if t.len() == 4 || t.len() == 5) {
                    tokens.next();
                }
                continue;
            }
            other => return Err(format!("unrecognized `go` option `{other}`")),
        });
    }
    Ok(UciCommand::Go(opts))
}

fn parse_u32(tok: Option<&str>) -> Result<u32, String> {
    tok.ok_or_else(|| "expected a number".to_string())?
        .parse()
        .map_err(|e| format!("could not parse number: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uci_and_isready() {
        assert_eq!(parse_line("uci"), Ok(UciCommand::Uci));
        assert_eq!(parse_line("isready"), Ok(UciCommand::IsReady));
    }

    #[test]
    fn parses_debug_toggle() {
        assert_eq!(parse_line("debug on"), Ok(UciCommand::Debug(true)));
        assert_eq!(parse_line("debug off"), Ok(UciCommand::Debug(false)));
    }

    #[test]
    fn parses_startpos_with_moves() {
        assert_eq!(
            parse_line("position startpos moves e2e4 e7e5"),
            Ok(UciCommand::Position { fen: None, moves: vec!["e2e4".into(), "e7e5".into()] })
        );
    }

    #[test]
    fn parses_startpos_with_no_moves_token() {
        assert_eq!(parse_line("position startpos"), Ok(UciCommand::Position { fen: None, moves: vec![] }));
    }

    #[test]
    fn parses_fen_with_moves() {
        assert_eq!(
            parse_line("position fen 8/8/8/8/8/8/8/K6k w - - 0 1 moves a1a2"),
            Ok(UciCommand::Position { fen: Some("8/8/8/8/8/8/8/K6k w - - 0 1".into()), moves: vec!["a1a2".into()] })
        );
    }

    #[test]
    fn parses_setoption_with_value() {
        assert_eq!(
            parse_line("setoption name Hash value 128"),
            Ok(UciCommand::SetOption { name: "Hash".into(), value: Some("128".into()) })
        );
    }

    #[test]
    fn parses_setoption_without_value() {
        assert_eq!(parse_line("setoption name Ponder"), Ok(UciCommand::SetOption { name: "Ponder".into(), value: None }));
    }

    #[test]
    fn parses_go_with_clock_fields() {
        assert_eq!(
            parse_line("go wtime 1000 btime 2000 winc 10 binc 20"),
            Ok(UciCommand::Go(vec![
                GoOption::WhiteTime(1000),
                GoOption::BlackTime(2000),
                GoOption::WhiteInc(10),
                GoOption::BlackInc(20),
            ]))
        );
    }

    #[test]
    fn parses_go_depth_and_infinite() {
        assert_eq!(parse_line("go depth 6"), Ok(UciCommand::Go(vec![GoOption::Depth(6)])));
        assert_eq!(parse_line("go infinite"), Ok(UciCommand::Go(vec![GoOption::Infinite])));
    }

    #[test]
    fn go_ignores_searchmoves_list() {
        assert_eq!(
            parse_line("go searchmoves e2e4 e2e3 depth 4"),
            Ok(UciCommand::Go(vec![GoOption::Depth(4)]))
        );
    }

    #[test]
    fn rejects_unrecognized_command() {
        assert!(parse_line("frobnicate").is_err());
    }
}
