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

use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

use raptor_base::Move;
use raptor_engine::Eval;

#[derive(Clone, PartialEq)]
/// The set of messages the engine can send back to the GUI.
pub enum UciMessage<'a> {
    /// Identify the engine. Must precede `UciOk`.
    Id { name: &'a str, author: &'a str },
    UciOk,
    ReadyOk,
    /// Advertise one configurable option.
    Option { name: &'a str, opt: OptionType<'a> },
    /// The result of a completed (or deadline-truncated) search.
    BestMove(Move),
    Info(&'a [EngineInfo<'a>]),
}

#[derive(Clone, Debug, PartialEq)]
/// One field of an `info` line. Several of these are combined into a single
/// `UciMessage::Info` so that a whole progress report is one line on the
/// wire.
pub enum EngineInfo<'a> {
    Depth(u8),
    Time(Duration),
    Nodes(u64),
    Pv(&'a [Move]),
    Score(Eval),
    HashFull(u16),
    NodeSpeed(u64),
    /// A free-form diagnostic string. Must not contain a newline.
    String(&'a str),
}

#[derive(Clone, Debug, PartialEq)]
/// The kind of widget a GUI should draw for an advertised option.
pub enum OptionType<'a> {
    Spin { default: i64, min: i64, max: i64 },
    #[allow(dead_code)]
    String(Option<&'a str>),
}

impl<'a> Display for UciMessage<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UciMessage::Id { name, author } => write!(f, "id name {name}\nid author {author}"),
            UciMessage::UciOk => write!(f, "uciok"),
            UciMessage::ReadyOk => write!(f, "readyok"),
            UciMessage::Option { name, opt } => write_option(f, name, opt),
            UciMessage::BestMove(m) => write!(f, "bestmove {}", m.to_uci()),
            UciMessage::Info(infos) => write_info(f, infos),
        }
    }
}

fn write_option(f: &mut Formatter, name: &str, opt: &OptionType) -> fmt::Result {
    write!(f, "option name {name} ")?;
    match opt {
        OptionType::Spin { default, min, max } => write!(f, "type spin default {default} min {min} max {max}"),
        OptionType::String(default) => {
            write!(f, "type string")?;
            if let Some(s) = default {
                write!(f, " default {s}")?;
            }
            Ok(())
        }
    }
}

fn write_info(f: &mut Formatter, infos: &[EngineInfo]) -> fmt::Result {
    write!(f, "info")?;
    for info in infos {
        match info {
            EngineInfo::Depth(d) => write!(f, " depth {d}")?,
            EngineInfo::Time(t) => write!(f, " time {}", t.as_millis())?,
            EngineInfo::Nodes(n) => write!(f, " nodes {n}")?,
            EngineInfo::Pv(pv) => {
                write!(f, " pv")?;
                for m in pv.iter() {
                    write!(f, " {}", m.to_uci())?;
                }
            }
            EngineInfo::Score(eval) => match eval.moves_to_mate() {
                Some(n) if eval.centipawn_val() > 0 => write!(f, " score mate {n}")?,
                Some(n) => write!(f, " score mate -{n}")?,
                None => write!(f, " score cp {}", eval.centipawn_val())?,
            },
            EngineInfo::HashFull(permill) => write!(f, " hashfull {permill}")?,
            EngineInfo::NodeSpeed(nps) => write!(f, " nps {nps}")?,
            EngineInfo::String(s) => write!(f, " string {s}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raptor_base::Square;

    #[test]
    fn id_spans_two_lines() {
        let msg = UciMessage::Id { name: "Raptor", author: "The Raptor Authors" };
        assert_eq!(msg.to_string(), "id name Raptor\nid author The Raptor Authors");
    }

    #[test]
    fn bestmove_formats_long_algebraic() {
        let m = Move::quiet(Square::E2, Square::E4);
        assert_eq!(UciMessage::BestMove(m).to_string(), "bestmove e2e4");
    }

    #[test]
    fn info_score_reports_mate_with_sign() {
        let infos = [EngineInfo::Score(Eval::mate_in(3))];
        assert_eq!(UciMessage::Info(&infos).to_string(), "info score mate 2");
        let infos = [EngineInfo::Score(-Eval::mate_in(3))];
        assert_eq!(UciMessage::Info(&infos).to_string(), "info score mate -2");
    }

    #[test]
    fn info_score_reports_centipawns() {
        let infos = [EngineInfo::Score(Eval::centipawns(57))];
        assert_eq!(UciMessage::Info(&infos).to_string(), "info score cp 57");
    }

    #[test]
    fn info_combines_every_field_on_one_line() {
        let pv = [Move::quiet(Square::E2, Square::E4)];
        let infos = [EngineInfo::Depth(4), EngineInfo::Nodes(1200), EngineInfo::Pv(&pv)];
        assert_eq!(UciMessage::Info(&infos).to_string(), "info depth 4 nodes 1200 pv e2e4");
    }

    #[test]
    fn option_spin_reports_bounds() {
        let msg = UciMessage::Option { name: "Hash", opt: OptionType::Spin { default: 16, min: 1, max: 1024 } };
        assert_eq!(msg.to_string(), "option name Hash type spin default 16 min 1 max 1024");
    }
}
